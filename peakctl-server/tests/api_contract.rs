//! Request/response contract of the resource endpoints
//!
//! Drives the full router against the recording executor so every test can
//! assert both the HTTP answer and exactly what reached the store.

use std::sync::Arc;

use axum::body::{to_bytes, Body};
use axum::http::{header, Method, Request, StatusCode};
use axum::Router;
use serde_json::{json, Value};
use tower::ServiceExt;

use peakctl_server::db::{Outcome, Row};
use peakctl_server::models::Scalar;
use peakctl_server::resources::{
    Changeset, Inventory, InventoryReports, Invoices, Notifications, Orders, Products, Record,
    Resource, Sales, Surveys, Users,
};
use peakctl_server::test_support::{FailingHasher, PrefixHasher, RecordingExecutor};
use peakctl_server::{build_router, AppState, CredentialHasher, ServerConfig};

struct Harness {
    executor: Arc<RecordingExecutor>,
    hasher: Arc<PrefixHasher>,
    app: Router,
}

impl Harness {
    fn new() -> Self {
        Self::with_executor(RecordingExecutor::new())
    }

    fn with_executor(executor: RecordingExecutor) -> Self {
        let executor = Arc::new(executor);
        let hasher = Arc::new(PrefixHasher::new());
        let app = app(executor.clone(), hasher.clone());
        Self {
            executor,
            hasher,
            app,
        }
    }

    async fn send(&self, method: Method, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
        send(&self.app, method, uri, body.map(|b| b.to_string())).await
    }
}

fn app(executor: Arc<RecordingExecutor>, hasher: Arc<dyn CredentialHasher>) -> Router {
    build_router(AppState::new(executor, hasher), &ServerConfig::default())
}

async fn send(app: &Router, method: Method, uri: &str, body: Option<String>) -> (StatusCode, Value) {
    let mut request = Request::builder().method(method).uri(uri);
    let body = match body {
        Some(text) => {
            request = request.header(header::CONTENT_TYPE, "application/json");
            Body::from(text)
        }
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(request.body(body).unwrap())
        .await
        .unwrap();
    let status = response.status();
    let bytes = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    let value = if bytes.is_empty() {
        Value::Null
    } else {
        serde_json::from_slice(&bytes).unwrap()
    };
    (status, value)
}

fn row(value: Value) -> Row {
    match value {
        Value::Object(map) => map,
        _ => unreachable!("test rows are objects"),
    }
}

fn jeans() -> Value {
    json!({
        "id_producto": 10,
        "nombre_productos": "Pantalón Jeans",
        "descripcion_productos": "Jean azul clásico",
        "precio_producto": 45.5,
        "tiempo_preparacion": "10 minutos",
        "categoria": "Ropa"
    })
}

fn new_user() -> Value {
    json!({
        "id_usuario": 7,
        "nombre_usuario": "Ana",
        "apellido_usuario": "Pérez",
        "contraseña": "secreto123",
        "correo_electronico": "ana@example.com",
        "telefono": "3001234567",
        "fecha_creacion": "2024-01-01",
        "fecha_modificacion": "2024-01-01"
    })
}

#[tokio::test]
async fn create_product_echoes_fields_with_client_id() {
    let h = Harness::new();
    h.executor.push_outcome(Outcome::inserted(0));

    let (status, body) = h.send(Method::POST, "/api/productos", Some(jeans())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], json!(10));
    for (key, value) in jeans().as_object().unwrap() {
        assert_eq!(&body[key], value, "field {}", key);
    }

    let calls = h.executor.calls();
    assert_eq!(calls.len(), 1);
    assert!(calls[0].sql.starts_with("INSERT INTO `productos`"));
    assert_eq!(calls[0].params[0], Scalar::Int(10));
}

#[tokio::test]
async fn create_reports_generated_id_when_store_assigns_one() {
    let h = Harness::new();
    h.executor.push_outcome(Outcome::inserted(42));

    let (status, body) = h.send(Method::POST, "/api/productos", Some(jeans())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["id"], json!(42));
}

#[tokio::test]
async fn create_user_reports_hash_not_plaintext() {
    let h = Harness::new();
    h.executor.push_outcome(Outcome::inserted(0));

    let (status, body) = h.send(Method::POST, "/api/usuarios", Some(new_user())).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body["passHash"], json!("hashed_secreto123"));
    assert!(body.get("contraseña").is_none());
    assert_eq!(h.hasher.seen(), vec!["secreto123".to_owned()]);

    let stored = &h.executor.calls()[0];
    assert!(stored.sql.contains("`contraseña`"));
    assert!(stored.params.contains(&Scalar::from("hashed_secreto123")));
    assert!(!stored.params.contains(&Scalar::from("secreto123")));
}

#[tokio::test]
async fn create_with_falsy_required_field_never_reaches_store() {
    let h = Harness::new();
    let mut body = jeans();
    body["precio_producto"] = json!(0);

    let (status, response) = h.send(Method::POST, "/api/productos", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response, json!({ "error": "Nombre y precio son requeridos" }));
    assert!(h.executor.calls().is_empty());
}

#[tokio::test]
async fn create_with_missing_required_field_is_rejected() {
    let h = Harness::new();
    let mut body = new_user();
    body.as_object_mut().unwrap().remove("contraseña");

    let (status, response) = h.send(Method::POST, "/api/usuarios", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response, json!({ "error": "Datos requeridos obligatoriamente" }));
    assert!(h.executor.calls().is_empty());
    assert!(h.hasher.seen().is_empty());
}

#[tokio::test]
async fn malformed_body_is_rejected_before_the_store() {
    let h = Harness::new();
    let bodies = [
        "{not json",
        r#"{"id_producto": {"nested": true}}"#,
        r#"{"categoria": [1, 2]}"#,
        r#"[10, "Pantalón Jeans", "Jean azul", 45, "10 minutos", "Ropa"]"#,
        "[]",
        r#""Pantalón Jeans""#,
        "45",
    ];

    for (method, uri) in [(Method::POST, "/api/productos"), (Method::PUT, "/api/productos/10")] {
        for raw in bodies {
            let (status, body) = send(&h.app, method.clone(), uri, Some(raw.to_owned())).await;
            assert_eq!(status, StatusCode::BAD_REQUEST, "{} {} body {}", method, uri, raw);
            assert_eq!(body, json!({ "error": "Cuerpo de la solicitud inválido" }));
        }
    }

    assert!(h.executor.calls().is_empty());
}

#[tokio::test]
async fn get_missing_inventory_is_404() {
    let h = Harness::new();
    h.executor.push_rows(Vec::new());

    let (status, body) = h.send(Method::GET, "/api/inventario/999", None).await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "inventario no encontrada" }));

    let calls = h.executor.calls();
    assert_eq!(calls[0].params, vec![Scalar::from("999")]);
}

#[tokio::test]
async fn list_returns_rows_in_store_order() {
    let h = Harness::new();
    h.executor.push_rows(vec![
        row(json!({ "id_venta": 2, "id_usuario": 7, "total_venta": 80.0 })),
        row(json!({ "id_venta": 1, "id_usuario": 7, "total_venta": 45.5 })),
    ]);

    let (status, body) = h.send(Method::GET, "/api/venta", None).await;

    assert_eq!(status, StatusCode::OK);
    let ids: Vec<&Value> = body.as_array().unwrap().iter().map(|r| &r["id_venta"]).collect();
    assert_eq!(ids, vec![&json!(2), &json!(1)]);
}

#[tokio::test]
async fn list_of_empty_table_is_empty_array() {
    let h = Harness::new();
    h.executor.push_rows(Vec::new());

    let (status, body) = h.send(Method::GET, "/api/notificacion", None).await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!([]));
}

#[tokio::test]
async fn store_failure_maps_to_operation_message() {
    let cases = [
        (Method::GET, "/api/venta", None, "al obtener los datos de la venta"),
        (Method::GET, "/api/venta/1", None, "Error al obtener la venta"),
        (
            Method::PUT,
            "/api/venta/1",
            Some(json!({ "total_venta": 10 })),
            "Error al actualizar la venta",
        ),
        (Method::DELETE, "/api/venta/1", None, "Error al eliminar la venta"),
    ];

    for (method, uri, body, message) in cases {
        let h = Harness::with_executor(RecordingExecutor::failing("connection refused"));
        let (status, response) = h.send(method, uri, body).await;
        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR, "{}", uri);
        assert_eq!(response, json!({ "error": message }));
    }

    let h = Harness::with_executor(RecordingExecutor::failing("duplicate entry"));
    let sale = json!({
        "id_venta": 1,
        "id_usuario": 7,
        "fecha_venta": "2024-03-01",
        "total_venta": 45.5,
        "comision": 4.5,
        "mesero_encargado": "Luis"
    });
    let (status, response) = h.send(Method::POST, "/api/venta", Some(sale)).await;
    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(response, json!({ "error": "Error al crear la venta" }));
}

#[tokio::test]
async fn hashing_failure_is_a_create_failure() {
    let executor = Arc::new(RecordingExecutor::new());
    let app = app(executor.clone(), Arc::new(FailingHasher));

    let (status, body) = send(
        &app,
        Method::POST,
        "/api/usuarios",
        Some(new_user().to_string()),
    )
    .await;

    assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
    assert_eq!(body, json!({ "error": "Error al crear el usuario" }));
    assert!(executor.calls().is_empty());
}

#[tokio::test]
async fn delete_twice_is_200_then_404() {
    let h = Harness::new();
    h.executor
        .push_outcome(Outcome::affected(1))
        .push_outcome(Outcome::affected(0));

    let (first, body) = h.send(Method::DELETE, "/api/pedidos/3", None).await;
    assert_eq!(first, StatusCode::OK);
    assert!(body["message"].is_string());

    let (second, body) = h.send(Method::DELETE, "/api/pedidos/3", None).await;
    assert_eq!(second, StatusCode::NOT_FOUND);
    assert!(body["error"].is_string());
}

#[tokio::test]
async fn update_writes_only_sent_fields() {
    let h = Harness::new();
    h.executor.push_outcome(Outcome::affected(1));

    let (status, body) = h
        .send(
            Method::PUT,
            "/api/productos/10",
            Some(json!({ "precio_producto": 50, "categoria": null })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Producto actualizado correctamente" }));

    let call = &h.executor.calls()[0];
    assert_eq!(
        call.sql,
        "UPDATE `productos` SET `precio_producto` = ?, `categoria` = ? WHERE `id_producto` = ?"
    );
    assert_eq!(
        call.params,
        vec![Scalar::Int(50), Scalar::Null, Scalar::from("10")]
    );
}

#[tokio::test]
async fn update_ignores_identity_in_body() {
    let h = Harness::new();
    h.executor.push_outcome(Outcome::affected(1));

    h.send(
        Method::PUT,
        "/api/productos/10",
        Some(json!({ "id_producto": 99, "categoria": "Calzado" })),
    )
    .await;

    let call = &h.executor.calls()[0];
    assert!(!call.sql.contains("SET `id_producto`"));
    assert_eq!(call.params.last(), Some(&Scalar::from("10")));
}

#[tokio::test]
async fn update_of_missing_row_is_404() {
    let h = Harness::new();
    h.executor.push_outcome(Outcome::affected(0));

    let (status, body) = h
        .send(Method::PUT, "/api/productos/77", Some(json!({ "categoria": "Ropa" })))
        .await;

    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body, json!({ "error": "Producto no encontrado " }));
}

#[tokio::test]
async fn empty_update_checks_existence() {
    let h = Harness::new();
    h.executor
        .push_rows(vec![row(json!({ "id_producto": 10 }))])
        .push_rows(Vec::new());

    let (found, _) = h.send(Method::PUT, "/api/productos/10", Some(json!({}))).await;
    let (missing, _) = h.send(Method::PUT, "/api/productos/11", Some(json!({}))).await;

    assert_eq!(found, StatusCode::OK);
    assert_eq!(missing, StatusCode::NOT_FOUND);
    assert!(h
        .executor
        .calls()
        .iter()
        .all(|call| call.sql.starts_with("SELECT")));
}

#[tokio::test]
async fn update_without_credential_keeps_stored_hash() {
    let h = Harness::new();
    h.executor
        .push_outcome(Outcome::affected(1))
        .push_outcome(Outcome::affected(1));

    h.send(
        Method::PUT,
        "/api/usuarios/7",
        Some(json!({ "telefono": "3009999999" })),
    )
    .await;
    h.send(
        Method::PUT,
        "/api/usuarios/7",
        Some(json!({ "telefono": "3008888888", "contraseña": "" })),
    )
    .await;

    assert!(h.hasher.seen().is_empty());
    for call in h.executor.calls() {
        assert!(!call.sql.contains("contraseña"), "{}", call.sql);
    }
}

#[tokio::test]
async fn update_with_new_credential_stores_hash() {
    let h = Harness::new();
    h.executor.push_outcome(Outcome::affected(1));

    let (status, body) = h
        .send(
            Method::PUT,
            "/api/usuarios/7",
            Some(json!({ "contraseña": "nuevo456" })),
        )
        .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body, json!({ "message": "Usuario actualizado correctamente" }));
    assert_eq!(
        h.executor.calls()[0].params,
        vec![Scalar::from("hashed_nuevo456"), Scalar::from("7")]
    );
}

#[tokio::test]
async fn created_record_reads_back() {
    let h = Harness::new();
    let report = json!({
        "id_informe": 5,
        "id_inventario": 2,
        "fecha_informe": "2024-05-01",
        "descripcion_informe": "Conteo mensual"
    });
    h.executor
        .push_outcome(Outcome::inserted(0))
        .push_rows(vec![row(report.clone())]);

    let (created, _) = h
        .send(Method::POST, "/api/informe_inventario", Some(report.clone()))
        .await;
    let (status, fetched) = h.send(Method::GET, "/api/informe_inventario/5", None).await;

    assert_eq!(created, StatusCode::CREATED);
    assert_eq!(status, StatusCode::OK);
    for (key, value) in report.as_object().unwrap() {
        assert_eq!(&fetched[key], value, "field {}", key);
    }
}

#[tokio::test]
async fn every_resource_is_mounted() {
    let paths = [
        "satisfaccion",
        "facturacion",
        "informe_inventario",
        "inventario",
        "notificacion",
        "pedidos",
        "productos",
        "usuarios",
        "venta",
    ];

    for path in paths {
        let h = Harness::new();
        h.executor.push_rows(Vec::new());
        let (status, _) = h.send(Method::GET, &format!("/api/{}", path), None).await;
        assert_eq!(status, StatusCode::OK, "/api/{}", path);
    }
}

#[tokio::test]
async fn create_keeps_explicit_null_fields() {
    let h = Harness::new();
    h.executor.push_outcome(Outcome::inserted(0));
    let invoice = json!({
        "id_factura": 3,
        "id_venta": 1,
        "fecha_factura": "2024-03-01",
        "metodo_pago": "Efectivo",
        "descuentos": null,
        "impuestos": 8.5,
        "tipos_factura": "Electrónica"
    });

    let (status, body) = h.send(Method::POST, "/api/facturacion", Some(invoice)).await;

    assert_eq!(status, StatusCode::CREATED);
    assert_eq!(body.get("descuentos"), Some(&Value::Null));

    let call = &h.executor.calls()[0];
    assert_eq!(
        call.sql,
        "INSERT INTO `facturacion` (`id_factura`, `id_venta`, `fecha_factura`, `metodo_pago`, \
         `descuentos`, `impuestos`, `tipos_factura`) VALUES (?, ?, ?, ?, ?, ?, ?)"
    );
    assert_eq!(call.params[4], Scalar::Null);
}

#[tokio::test]
async fn null_required_field_is_rejected() {
    let h = Harness::new();
    let mut body = jeans();
    body["categoria"] = Value::Null;

    let (status, response) = h.send(Method::POST, "/api/productos", Some(body)).await;

    assert_eq!(status, StatusCode::BAD_REQUEST);
    assert_eq!(response, json!({ "error": "Nombre y precio son requeridos" }));
    assert!(h.executor.calls().is_empty());
}

/// Client-facing strings one resource must answer with, byte for byte.
struct Expected {
    invalid: &'static str,
    not_found: &'static str,
    update_not_found: &'static str,
    updated: &'static str,
    delete_not_found: &'static str,
    deleted: &'static str,
}

/// A create body with every column filled in and truthy.
fn full_payload<R: Resource>() -> Value {
    let d = R::DESCRIPTOR;
    let mut body = serde_json::Map::new();
    for column in <R::Record as Record>::COLUMNS {
        let value = if *column == d.identity {
            json!(1)
        } else {
            json!("valor")
        };
        body.insert((*column).to_owned(), value);
    }
    Value::Object(body)
}

async fn assert_contract<R: Resource>(expected: Expected) {
    let d = R::DESCRIPTOR;
    let base = format!("/api/{}", d.path);
    let item = format!("{}/1", base);

    // Create: every required field, one at a time, sent as an empty string
    for blank in d.required {
        let h = Harness::new();
        let mut body = full_payload::<R>();
        body[*blank] = json!("");

        let (status, response) = h.send(Method::POST, &base, Some(body)).await;
        assert_eq!(status, StatusCode::BAD_REQUEST, "{} with blank {}", d.path, blank);
        assert_eq!(response, json!({ "error": expected.invalid }), "{}", d.path);
        assert!(h.executor.calls().is_empty(), "{} reached the store", d.path);
    }

    let h = Harness::new();
    h.executor.push_outcome(Outcome::inserted(0));
    let (status, created) = h.send(Method::POST, &base, Some(full_payload::<R>())).await;
    assert_eq!(status, StatusCode::CREATED, "{}", d.path);
    assert_eq!(created["id"], json!(1), "{}", d.path);

    let h = Harness::new();
    h.executor.push_rows(Vec::new());
    let (status, response) = h.send(Method::GET, &item, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND, "{}", d.path);
    assert_eq!(response, json!({ "error": expected.not_found }), "{}", d.path);

    let mut change = serde_json::Map::new();
    change.insert(<R::Changes as Changeset>::COLUMNS[0].to_owned(), json!("nuevo"));
    let change = Value::Object(change);
    let h = Harness::new();
    h.executor
        .push_outcome(Outcome::affected(1))
        .push_outcome(Outcome::affected(0));
    let (status, response) = h.send(Method::PUT, &item, Some(change.clone())).await;
    assert_eq!(status, StatusCode::OK, "{}", d.path);
    assert_eq!(response, json!({ "message": expected.updated }), "{}", d.path);
    let (status, response) = h.send(Method::PUT, &item, Some(change)).await;
    assert_eq!(status, StatusCode::NOT_FOUND, "{}", d.path);
    assert_eq!(response, json!({ "error": expected.update_not_found }), "{}", d.path);

    let h = Harness::new();
    h.executor
        .push_outcome(Outcome::affected(1))
        .push_outcome(Outcome::affected(0));
    let (status, response) = h.send(Method::DELETE, &item, None).await;
    assert_eq!(status, StatusCode::OK, "{}", d.path);
    assert_eq!(response, json!({ "message": expected.deleted }), "{}", d.path);
    let (status, response) = h.send(Method::DELETE, &item, None).await;
    assert_eq!(status, StatusCode::NOT_FOUND, "{}", d.path);
    assert_eq!(response, json!({ "error": expected.delete_not_found }), "{}", d.path);
}

#[tokio::test]
async fn every_resource_answers_with_its_own_messages() {
    assert_contract::<Surveys>(Expected {
        invalid: "Puntuacion, comentarios necesarios y fecha",
        not_found: "Encuesta no encontrada",
        update_not_found: "Encuesta no encontrada ",
        updated: "Encuesta de satisfaccion actualizada correctamente",
        delete_not_found: "Encuesta no encontrada",
        deleted: "Encuesta eliminada correctamente",
    })
    .await;

    assert_contract::<Invoices>(Expected {
        invalid: "Metodo de pago y tipo de facturacion son requeridos",
        not_found: "Factura no encontrada",
        update_not_found: "Factura no encontrada ",
        updated: "Factura actualizada correctamente",
        delete_not_found: "Factura no encontrada",
        deleted: "Factura eliminada corectamente",
    })
    .await;

    assert_contract::<InventoryReports>(Expected {
        invalid: "La descripcion es necesaria",
        not_found: "Informe no encontrado",
        update_not_found: "Informe no encontrado ",
        updated: "Informe de inventario actualizado correctamente",
        delete_not_found: "Informe no encontrado",
        deleted: "Informe eliminado correctamente",
    })
    .await;

    assert_contract::<Inventory>(Expected {
        invalid: "Datos requeridos obligaroriamente",
        not_found: "inventario no encontrada",
        update_not_found: "Inventario no encontrado ",
        updated: "Inventario actualizado correctamente",
        delete_not_found: "Inventario no encontrado",
        deleted: "Inventario eliminado corectamente",
    })
    .await;

    assert_contract::<Notifications>(Expected {
        invalid: "Datos requeridos obligatoriamente",
        not_found: "notificacion no encontrada",
        update_not_found: "Notificacion no encontrada ",
        updated: "Notificacion actualizada correctamente",
        delete_not_found: "Notificacion no encontrada",
        deleted: "Notificacion eliminada corectamente",
    })
    .await;

    assert_contract::<Orders>(Expected {
        invalid: "Datos requeridos",
        not_found: "Pedido no encontrado",
        update_not_found: "Pedido no encontrada ",
        updated: "Pedido actualizada correctamente",
        delete_not_found: "Pedido no encontrado",
        deleted: "Pedido eliminado corectamente",
    })
    .await;

    assert_contract::<Products>(Expected {
        invalid: "Nombre y precio son requeridos",
        not_found: "producto no encontrado",
        update_not_found: "Producto no encontrado ",
        updated: "Producto actualizado correctamente",
        delete_not_found: "Producto no encontrado",
        deleted: "Producto eliminado corectamente",
    })
    .await;

    assert_contract::<Users>(Expected {
        invalid: "Datos requeridos obligatoriamente",
        not_found: "Usuario no encontrado",
        update_not_found: "Usuario no encontrado ",
        updated: "Usuario actualizado correctamente",
        delete_not_found: "Usuario no encontrado",
        deleted: "Usuario eliminado corectamente",
    })
    .await;

    assert_contract::<Sales>(Expected {
        invalid: "Datos requeridos",
        not_found: "venta no encontrada",
        update_not_found: "venta no encontrada ",
        updated: "Venta actualizada correctamente",
        delete_not_found: "Venta no encontrada",
        deleted: "Venta eliminada corectamente",
    })
    .await;
}
