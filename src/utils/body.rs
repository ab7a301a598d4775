//! Extracción del cuerpo de las solicitudes
//!
//! Acepta JSON y formularios `application/x-www-form-urlencoded`. Un cuerpo
//! vacío o con otro tipo de contenido se trata como un objeto vacío; solo un
//! cuerpo que no se puede decodificar produce un 400.

use axum::{
    async_trait,
    body::Bytes,
    extract::{FromRequest, Request},
    http::header::CONTENT_TYPE,
    Form, Json,
};
use serde::de::DeserializeOwned;
use tracing::debug;

use super::errors::AppError;

#[derive(Debug, PartialEq, Eq)]
enum Formato {
    Json,
    Formulario,
    Otro,
}

fn formato(content_type: Option<&str>) -> Formato {
    let Some(content_type) = content_type else {
        return Formato::Otro;
    };
    let tipo = content_type
        .split(';')
        .next()
        .unwrap_or_default()
        .trim()
        .to_ascii_lowercase();

    if tipo == "application/json" || tipo.ends_with("+json") {
        Formato::Json
    } else if tipo == "application/x-www-form-urlencoded" {
        Formato::Formulario
    } else {
        Formato::Otro
    }
}

/// Cuerpo de la solicitud; `T::default()` cuando no hay nada que leer
#[derive(Debug)]
pub struct CuerpoSolicitud<T>(pub T);

#[async_trait]
impl<S, T> FromRequest<S> for CuerpoSolicitud<T>
where
    S: Send + Sync,
    T: DeserializeOwned + Default,
{
    type Rejection = AppError;

    async fn from_request(req: Request, state: &S) -> Result<Self, Self::Rejection> {
        let content_type = req
            .headers()
            .get(CONTENT_TYPE)
            .and_then(|value| value.to_str().ok());

        match formato(content_type) {
            Formato::Formulario => {
                let Form(value) = Form::<T>::from_request(req, state)
                    .await
                    .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
                Ok(Self(value))
            }
            formato => {
                let bytes = Bytes::from_request(req, state)
                    .await
                    .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;

                if formato == Formato::Otro || bytes.iter().all(u8::is_ascii_whitespace) {
                    debug!("Cuerpo vacío o sin JSON, se usa un objeto vacío");
                    return Ok(Self(T::default()));
                }

                let Json(value) = Json::<T>::from_bytes(&bytes)
                    .map_err(|rejection| AppError::BadRequest(rejection.body_text()))?;
                Ok(Self(value))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::body::Body;
    use serde::Deserialize;

    #[derive(Debug, Default, Deserialize, PartialEq)]
    struct Campos {
        nombre: Option<String>,
    }

    async fn extraer(content_type: Option<&str>, body: &'static str) -> Result<Campos, AppError> {
        let mut builder = Request::builder().method("POST").uri("/");
        if let Some(content_type) = content_type {
            builder = builder.header(CONTENT_TYPE, content_type);
        }
        let req = builder.body(Body::from(body)).unwrap();
        CuerpoSolicitud::<Campos>::from_request(req, &())
            .await
            .map(|CuerpoSolicitud(campos)| campos)
    }

    #[test]
    fn test_formato() {
        assert_eq!(formato(Some("application/json; charset=utf-8")), Formato::Json);
        assert_eq!(formato(Some("application/merge-patch+json")), Formato::Json);
        assert_eq!(formato(Some("application/x-www-form-urlencoded")), Formato::Formulario);
        assert_eq!(formato(Some("text/plain")), Formato::Otro);
        assert_eq!(formato(None), Formato::Otro);
    }

    #[tokio::test]
    async fn test_missing_body_is_empty_object() {
        assert_eq!(extraer(None, "").await.unwrap(), Campos::default());
        assert_eq!(extraer(Some("application/json"), "").await.unwrap(), Campos::default());
        assert_eq!(extraer(Some("text/plain"), "{\"nombre\": \"x\"}").await.unwrap(), Campos::default());
    }

    #[tokio::test]
    async fn test_reads_json_and_form() {
        let json = extraer(Some("application/json"), r#"{"nombre": "Centro"}"#).await.unwrap();
        assert_eq!(json.nombre.as_deref(), Some("Centro"));

        let form = extraer(Some("application/x-www-form-urlencoded"), "nombre=Centro").await.unwrap();
        assert_eq!(form.nombre.as_deref(), Some("Centro"));
    }

    #[tokio::test]
    async fn test_invalid_json_is_bad_request() {
        let result = extraer(Some("application/json"), "{no es json").await;
        assert!(matches!(result, Err(AppError::BadRequest(_))));
    }
}
