use common::model::config::{AffiliateSettings, ConfigModel};
use common::requests::CONFIG_PATH;
use log::warn;

use super::{ConsoleView, Panel};
use crate::api::{api, ApiRequest, RequestError, Transport};

pub const SAVING: &str = "กำลังบันทึก...";
pub const SAVED: &str = "บันทึกแล้ว ✓";
pub const FAILURE_PREFIX: &str = "บันทึกล้มเหลว: ";

/// Loads the backend configuration into the form.
///
/// A failure leaves the form at its empty defaults and shows nothing on the
/// config panel; it is only logged.
pub async fn load<T, V>(transport: &T, view: &V) -> Result<ConfigModel, RequestError>
where
    T: Transport + ?Sized,
    V: ConsoleView + ?Sized,
{
    match api::<ConfigModel, _>(transport, ApiRequest::get(CONFIG_PATH)).await {
        Ok(config) => {
            view.populate_form(config.affiliate.clone());
            Ok(config)
        }
        Err(err) => {
            warn!("config load failed: {}", err);
            Err(err)
        }
    }
}

/// Saves the affiliate settings collected from the form.
pub async fn save<T, V>(
    transport: &T,
    view: &V,
    affiliate: AffiliateSettings,
) -> Result<(), RequestError>
where
    T: Transport + ?Sized,
    V: ConsoleView + ?Sized,
{
    view.set_status(Panel::Config, SAVING.to_string());

    let model = ConfigModel { affiliate };
    let result = match ApiRequest::post_json(CONFIG_PATH, &model) {
        Ok(request) => transport.send(request).await.map(|_| ()),
        Err(err) => Err(err),
    };

    match &result {
        Ok(()) => view.set_status(Panel::Config, SAVED.to_string()),
        Err(err) => view.set_status(Panel::Config, format!("{}{}", FAILURE_PREFIX, err)),
    }
    result
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::{Body, Method};
    use crate::flows::testing::{FakeTransport, RecordingView, ViewEvent};
    use serde_json::json;

    #[tokio::test]
    async fn load_then_save_round_trips_affiliate() {
        let loaded = json!({
            "affiliate": { "endpoint": "https://x", "app_id": "A1", "secret": "S1", "enabled": true }
        });
        let transport = FakeTransport::new();
        transport.respond_ok(loaded.clone());
        transport.respond_ok(json!({ "ok": true }));
        let view = RecordingView::new();

        load(&transport, &view).await.unwrap();
        let populated = view
            .events()
            .into_iter()
            .find_map(|event| match event {
                ViewEvent::Form(settings) => Some(settings),
                _ => None,
            })
            .expect("form populated");

        save(&transport, &view, populated).await.unwrap();

        let sent = transport.requests();
        assert_eq!(sent[0].method, Method::Get);
        assert_eq!(sent[0].path, "/api/config");
        assert_eq!(sent[1].method, Method::Post);
        assert_eq!(sent[1].body, Body::Json(loaded));
        assert_eq!(view.status(Panel::Config).as_deref(), Some(SAVED));
    }

    #[tokio::test]
    async fn load_defaults_missing_fields() {
        let transport = FakeTransport::new();
        transport.respond_ok(json!({ "affiliate": { "enabled": false } }));
        let view = RecordingView::new();

        load(&transport, &view).await.unwrap();
        assert_eq!(view.events(), vec![ViewEvent::Form(AffiliateSettings::default())]);
    }

    #[tokio::test]
    async fn load_failure_is_invisible() {
        let transport = FakeTransport::new();
        transport.respond_status(500, "boom");
        let view = RecordingView::new();

        assert!(load(&transport, &view).await.is_err());
        assert!(view.events().is_empty());
    }

    #[tokio::test]
    async fn save_failure_is_reported() {
        let transport = FakeTransport::new();
        transport.respond_status(422, "invalid endpoint");
        let view = RecordingView::new();

        let result = save(&transport, &view, AffiliateSettings::default()).await;
        assert!(result.is_err());
        assert_eq!(
            view.events(),
            vec![
                ViewEvent::Status(Panel::Config, SAVING.to_string()),
                ViewEvent::Status(Panel::Config, "บันทึกล้มเหลว: invalid endpoint".to_string()),
            ]
        );
    }
}
