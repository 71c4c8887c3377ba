use yew::prelude::*;
use yew_router::prelude::*;

use crate::pages::not_found::NotFoundPage;
use crate::pages::overview::OverviewPage;
use crate::pages::resource::{Resource, ResourcePage};

#[derive(Debug, Clone, Copy, Routable, PartialEq, Eq, Hash)]
pub enum Route {
    #[at("/")]
    Overview,
    #[at("/bills")]
    Bills,
    #[at("/bank-accounts")]
    BankAccounts,
    #[at("/categories")]
    Categories,
    #[at("/recurrences")]
    Recurrences,
    #[at("/statuses")]
    Statuses,
    #[not_found]
    #[at("/404")]
    NotFound,
}

impl Route {
    /// The resource listed on this route, if any
    pub fn resource(self) -> Option<Resource> {
        match self {
            Route::Bills => Some(Resource::Bills),
            Route::BankAccounts => Some(Resource::BankAccounts),
            Route::Categories => Some(Resource::Categories),
            Route::Recurrences => Some(Resource::Recurrences),
            Route::Statuses => Some(Resource::Statuses),
            Route::Overview | Route::NotFound => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Route::Overview => "Home",
            Route::NotFound => "Not Found",
            _ => self.resource().map_or("", Resource::label),
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Route::Overview => "fas fa-university",
            Route::NotFound => "fas fa-question-circle",
            _ => self.resource().map_or("", Resource::icon),
        }
    }
}

pub fn switch(route: Route) -> Html {
    log::debug!("Routing to: {:?}", route);
    match route {
        Route::Overview => {
            log::trace!("Rendering Overview page");
            html! { <OverviewPage /> }
        }
        Route::Bills => resource_page(Resource::Bills),
        Route::BankAccounts => resource_page(Resource::BankAccounts),
        Route::Categories => resource_page(Resource::Categories),
        Route::Recurrences => resource_page(Resource::Recurrences),
        Route::Statuses => resource_page(Resource::Statuses),
        Route::NotFound => {
            log::warn!("404 - Route not found");
            html! { <NotFoundPage /> }
        }
    }
}

/// Keyed by resource so no page state survives a switch to a sibling page
fn resource_page(resource: Resource) -> Html {
    log::trace!("Rendering {} page", resource.label());
    html! { <ResourcePage key={resource.key()} resource={resource} /> }
}
