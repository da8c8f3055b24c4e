use leptos_router::hooks::use_navigate;
use leptos_router::NavigateOptions;
use std::rc::Rc;

/// Fire-and-forget navigation to an application path
pub trait Navigator {
    fn navigate(&self, path: &str);
}

/// `Navigator` backed by leptos_router. Must be created inside `<Router>`.
#[derive(Clone)]
pub struct RouterNavigator {
    navigate: Rc<dyn Fn(&str)>,
}

impl RouterNavigator {
    pub fn from_router() -> Self {
        let navigate = use_navigate();
        Self {
            navigate: Rc::new(move |path: &str| navigate(path, NavigateOptions::default())),
        }
    }
}

impl Navigator for RouterNavigator {
    fn navigate(&self, path: &str) {
        log::debug!("navigate -> {}", path);
        (self.navigate)(path);
    }
}
