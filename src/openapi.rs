/// OpenAPI documentation for the Event Service
use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Nova Event Service API",
        version = "1.0.0",
        description = "Event management, role assignments, and access control",
        contact(
            name = "Nova Team",
            email = "support@nova.app"
        ),
        license(
            name = "MIT"
        )
    ),
    servers(
        (url = "http://localhost:3000", description = "Development server"),
        (url = "https://api.nova.app/events", description = "Production server"),
    ),
    tags(
        (name = "Health", description = "Service health checks"),
        (name = "Events", description = "Event management"),
        (name = "Roles", description = "Event role assignments"),
        (name = "Access", description = "Permission introspection"),
    )
)]
pub struct ApiDoc;
