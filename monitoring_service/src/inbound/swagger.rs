use models_minerals::{Filing, LinkCounts, Property, ReliefType, StrLocation, Well, WellStatus};
use utoipa::OpenApi;

use crate::domain::models::{LinkedActivityReport, PassSources, ReadSource};

#[derive(OpenApi)]
#[openapi(
    paths(crate::inbound::http::get_link_counts),
    components(
        schemas(
            LinkedActivityReport,
            PassSources,
            ReadSource,
            LinkCounts,
            StrLocation,
            Property,
            Well,
            WellStatus,
            Filing,
            ReliefType,
        )
    ),
    tags(
        (name = "monitoring service", description = "Minerals Monitoring Service")
    )
)]
pub struct ApiDoc;
