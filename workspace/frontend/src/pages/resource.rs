use yew::prelude::*;

use crate::router::Route;

/// Record kinds that each get their own page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Resource {
    Bills,
    BankAccounts,
    Categories,
    Recurrences,
    Statuses,
}

impl Resource {
    pub const ALL: [Resource; 5] = [
        Resource::Bills,
        Resource::BankAccounts,
        Resource::Categories,
        Resource::Recurrences,
        Resource::Statuses,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Resource::Bills => "Bills",
            Resource::BankAccounts => "Bank Accounts",
            Resource::Categories => "Categories",
            Resource::Recurrences => "Recurrences",
            Resource::Statuses => "Statuses",
        }
    }

    pub fn key(self) -> &'static str {
        match self {
            Resource::Bills => "bills",
            Resource::BankAccounts => "bank-accounts",
            Resource::Categories => "categories",
            Resource::Recurrences => "recurrences",
            Resource::Statuses => "statuses",
        }
    }

    pub fn icon(self) -> &'static str {
        match self {
            Resource::Bills => "fas fa-receipt",
            Resource::BankAccounts => "fas fa-university",
            Resource::Categories => "fas fa-tags",
            Resource::Recurrences => "fas fa-calendar-alt",
            Resource::Statuses => "fas fa-check-circle",
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Resource::Bills => "Bills you owe, with their amounts and due dates.",
            Resource::BankAccounts => "Accounts that bills are paid from.",
            Resource::Categories => "Groups used to organise bills.",
            Resource::Recurrences => "Schedules on which bills repeat.",
            Resource::Statuses => "Labels that track where each bill stands.",
        }
    }

    pub fn route(self) -> Route {
        match self {
            Resource::Bills => Route::Bills,
            Resource::BankAccounts => Route::BankAccounts,
            Resource::Categories => Route::Categories,
            Resource::Recurrences => Route::Recurrences,
            Resource::Statuses => Route::Statuses,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct ResourcePageProps {
    pub resource: Resource,
}

#[function_component(ResourcePage)]
pub fn resource_page(props: &ResourcePageProps) -> Html {
    let resource = props.resource;

    html! {
        <div class="flex flex-col gap-6">
            <div class="flex items-center gap-3">
                <i class={classes!(resource.icon(), "text-2xl", "text-primary")}></i>
                <h1 class="text-3xl font-bold">{resource.label()}</h1>
            </div>
            <p class="text-base-content/70">{resource.description()}</p>

            <div class="card bg-base-100 shadow">
                <div class="card-body">
                    <div class="alert alert-info">
                        <i class="fas fa-info-circle"></i>
                        <span>{format!("No {} to display yet.", resource.label().to_lowercase())}</span>
                    </div>
                </div>
            </div>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use yew_router::Routable;

    #[test]
    fn test_keys_match_route_paths() {
        for resource in Resource::ALL {
            assert_eq!(format!("/{}", resource.key()), resource.route().to_path());
        }
    }

    #[test]
    fn test_resources_are_distinct() {
        let routes: HashSet<_> = Resource::ALL.iter().map(|r| r.route()).collect();
        let labels: HashSet<_> = Resource::ALL.iter().map(|r| r.label()).collect();
        assert_eq!(routes.len(), Resource::ALL.len());
        assert_eq!(labels.len(), Resource::ALL.len());
    }
}
