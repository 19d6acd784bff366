use std::rc::Rc;

use leptos::*;

use super::repository::DashboardRepository;
use crate::api::{ApiClient, ApiError, Property};

#[derive(Clone, Copy)]
pub struct DashboardViewModel {
    pub properties: Resource<(), Result<Vec<Property>, ApiError>>,
}

pub fn use_dashboard_view_model() -> DashboardViewModel {
    let api = use_context::<ApiClient>().unwrap_or_else(ApiClient::new);
    let repo = DashboardRepository::new_with_client(Rc::new(api));

    let properties = create_resource(
        || (),
        move |_| {
            let repo = repo.clone();
            async move { repo.properties().await }
        },
    );

    DashboardViewModel { properties }
}
