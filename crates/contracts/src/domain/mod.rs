pub mod a025_product;
