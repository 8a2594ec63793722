use async_trait::async_trait;
use common::requests::{UploadResponse, COMMISSION_UPLOAD_PATH, UPLOAD_FIELD};
use log::debug;

use super::{ConsoleView, Panel};
use crate::api::{api, ApiRequest, RequestError, Transport, UploadFile};

pub const SELECT_FILE: &str = "เลือกไฟล์ CSV ก่อน";
pub const IN_FLIGHT: &str = "กำลังอัปโหลด...";
pub const FAILURE_PREFIX: &str = "อัปโหลดล้มเหลว: ";

pub fn ingested_status(rows: u64) -> String {
    format!("อัปโหลดสำเร็จ: {} แถว", rows)
}

/// A picked file whose contents still have to be read.
#[async_trait(?Send)]
pub trait UploadSource {
    async fn read(self) -> Result<UploadFile, RequestError>;
}

#[async_trait(?Send)]
impl UploadSource for UploadFile {
    async fn read(self) -> Result<UploadFile, RequestError> {
        Ok(self)
    }
}

/// Uploads a commission CSV. Without a file nothing is sent and the panel asks
/// for one; the result is then `Ok(None)`. The in-flight status is shown
/// before the file is read.
pub async fn run<T, V, F>(
    transport: &T,
    view: &V,
    file: Option<F>,
) -> Result<Option<UploadResponse>, RequestError>
where
    T: Transport + ?Sized,
    V: ConsoleView + ?Sized,
    F: UploadSource,
{
    let Some(source) = file else {
        view.set_status(Panel::Upload, SELECT_FILE.to_string());
        return Ok(None);
    };

    view.set_status(Panel::Upload, IN_FLIGHT.to_string());

    let result = match source.read().await {
        Ok(file) => {
            debug!("uploading {} ({} bytes)", file.name, file.bytes.len());
            let request = ApiRequest::post_multipart(COMMISSION_UPLOAD_PATH, UPLOAD_FIELD, file);
            api::<UploadResponse, _>(transport, request).await
        }
        Err(err) => Err(err),
    };

    match result {
        Ok(response) => {
            view.set_status(Panel::Upload, ingested_status(response.ingested));
            Ok(Some(response))
        }
        Err(err) => {
            view.set_status(Panel::Upload, format!("{}{}", FAILURE_PREFIX, err));
            Err(err)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::Body;
    use crate::flows::testing::{FakeTransport, RecordingView, ViewEvent};
    use serde_json::json;

    fn csv() -> UploadFile {
        UploadFile {
            name: "commission.csv".to_string(),
            bytes: b"itemid,commission_rate\n123,7.5\n".to_vec(),
        }
    }

    #[tokio::test]
    async fn without_file_sends_nothing() {
        let transport = FakeTransport::new();
        let view = RecordingView::new();

        let result = run(&transport, &view, None::<UploadFile>).await;

        assert_eq!(result, Ok(None));
        assert!(transport.requests().is_empty());
        assert_eq!(view.status(Panel::Upload).as_deref(), Some(SELECT_FILE));
    }

    #[tokio::test]
    async fn posts_file_under_file_field() {
        let transport = FakeTransport::new();
        transport.respond_ok(json!({ "ok": true, "ingested": 42 }));
        let view = RecordingView::new();

        let response = run(&transport, &view, Some(csv())).await.unwrap();

        assert_eq!(response.map(|r| r.ingested), Some(42));
        let sent = transport.requests();
        assert_eq!(sent[0].path, "/api/commission/upload");
        assert_eq!(
            sent[0].body,
            Body::Multipart {
                field: "file",
                file: csv()
            }
        );
        assert_eq!(view.status(Panel::Upload).as_deref(), Some("อัปโหลดสำเร็จ: 42 แถว"));
    }

    #[tokio::test]
    async fn failure_is_reported() {
        let transport = FakeTransport::new();
        transport.respond_status(422, "missing file");
        let view = RecordingView::new();

        assert!(run(&transport, &view, Some(csv())).await.is_err());
        assert_eq!(
            view.status(Panel::Upload).as_deref(),
            Some("อัปโหลดล้มเหลว: missing file")
        );
    }

    struct Unreadable;

    #[async_trait(?Send)]
    impl UploadSource for Unreadable {
        async fn read(self) -> Result<UploadFile, RequestError> {
            Err(RequestError::Encode("NotReadableError".to_string()))
        }
    }

    #[tokio::test]
    async fn in_flight_is_shown_before_reading_and_read_failure_sends_nothing() {
        let transport = FakeTransport::new();
        let view = RecordingView::new();

        let result = run(&transport, &view, Some(Unreadable)).await;

        assert_eq!(result, Err(RequestError::Encode("NotReadableError".to_string())));
        assert!(transport.requests().is_empty());
        assert_eq!(
            view.events(),
            vec![
                ViewEvent::Status(Panel::Upload, IN_FLIGHT.to_string()),
                ViewEvent::Status(Panel::Upload, "อัปโหลดล้มเหลว: NotReadableError".to_string()),
            ]
        );
    }
}
