//! Drive a facet editor session against a live admin API.
//!
//! ```sh
//! FIELDKIT_ENDPOINT=https://shop.example.com/admin-api \
//! FIELDKIT_TOKEN=... \
//! cargo run --example facet_editor -- <facet-id>
//! ```

use std::sync::Arc;

use serde_json::json;

use fieldkit_form::WidgetRegistry;
use fieldkit_remote::{EditorSession, HttpTransport, TransportConfig};
use fieldkit_schema::SchemaRegistry;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "info".into()),
        )
        .init();

    let facet_id = std::env::args()
        .nth(1)
        .ok_or("usage: facet_editor <facet-id>")?;
    let endpoint =
        std::env::var("FIELDKIT_ENDPOINT").unwrap_or_else(|_| "http://localhost:3000/admin-api".into());

    // In a real admin UI this comes from the server's config endpoint.
    let schema = SchemaRegistry::from_json(
        r#"[
            {
                "entityName": "Facet",
                "customFields": [
                    {"name": "isPrivate", "kind": "boolean"},
                    {"name": "seoText", "kind": "localeText", "ui": {"tab": "SEO"}}
                ]
            }
        ]"#,
    )?;

    let mut config = TransportConfig::new(endpoint);
    if let Ok(token) = std::env::var("FIELDKIT_TOKEN") {
        config = config.with_bearer_token(token);
    }
    let transport = Arc::new(HttpTransport::with_config(&config)?);

    let mut session = EditorSession::for_entity("facet", &schema)
        .with_id(&facet_id)
        .with_language("en")
        .with_transport(transport)
        .build();

    session.fetch().await;

    for tab in session.render(&WidgetRegistry::new()) {
        println!("[{}]", tab.name);
        for rendered in &tab.fields {
            let binding = session.binding(&rendered.field.name).expect("known field");
            println!(
                "  {} ({:?}) = {:?}",
                binding.label(),
                rendered.widget,
                binding.value(session.state())
            );
        }
    }

    session.set_value("isPrivate", Some(json!(true)));
    session.save().await?;

    Ok(())
}
