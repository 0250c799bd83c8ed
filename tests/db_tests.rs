//! Tests de integración contra PostgreSQL real
//!
//! Cada test recibe su propia base aislada vía `#[sqlx::test]` y aplica el
//! esquema de `sql/schema.sql` antes de levantar el router. Requieren un
//! PostgreSQL accesible en `DATABASE_URL`, por eso van marcados `#[ignore]`:
//!
//!     DATABASE_URL=postgres://... cargo test -- --ignored

use axum::{
    body::Body,
    http::{Request, StatusCode},
    Router,
};
use chrono::NaiveDate;
use serde_json::{json, Value};
use sqlx::{Executor, PgPool};
use tower::ServiceExt; // for oneshot

use diario_motorista::config::environment::EnvironmentConfig;
use diario_motorista::models::ControleOleo;
use diario_motorista::state::AppState;

const TEST_TOKEN: &str = "token-de-teste";

async fn create_db_app(pool: PgPool) -> Router {
    pool.execute(include_str!("../sql/schema.sql"))
        .await
        .expect("aplicar esquema");

    let config = EnvironmentConfig {
        port: 3000,
        host: "0.0.0.0".to_string(),
        api_token: TEST_TOKEN.to_string(),
    };

    diario_motorista::build_app(AppState::new(pool, config))
}

async fn request(app: &Router, method: &str, uri: &str, body: Option<Value>) -> (StatusCode, Value) {
    let builder = Request::builder()
        .method(method)
        .uri(uri)
        .header("x-api-token", TEST_TOKEN)
        .header("content-type", "application/json");

    let body = match body {
        Some(json) => Body::from(json.to_string()),
        None => Body::empty(),
    };

    let response = app
        .clone()
        .oneshot(builder.body(body).unwrap())
        .await
        .unwrap();

    let status = response.status();
    let bytes = axum::body::to_bytes(response.into_body(), usize::MAX)
        .await
        .expect("body");
    let json = serde_json::from_slice(&bytes).unwrap_or(Value::Null);
    (status, json)
}

fn dia_trabalho_payload(data: &str) -> Value {
    json!({
        "data": data,
        "turno": "manhã",
        "km_rodado": 120,
        "ganho_bruto": 250.5,
        "combustivel_informado": 30,
        "hora_inicio": "08:00",
        "hora_fim": "16:00",
        "observacoes": "ok"
    })
}

async fn controle_oleo(pool: &PgPool) -> ControleOleo {
    sqlx::query_as::<_, ControleOleo>("SELECT * FROM controle_oleo ORDER BY id LIMIT 1")
        .fetch_one(pool)
        .await
        .expect("fila de controle_oleo")
}

#[sqlx::test]
#[ignore = "requiere PostgreSQL accesible en DATABASE_URL"]
async fn test_create_dia_trabalho_devuelve_campos_e_id(pool: PgPool) {
    let app = create_db_app(pool).await;

    let (status, body) =
        request(&app, "POST", "/dia-trabalho", Some(dia_trabalho_payload("2024-01-10"))).await;

    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].is_i64());
    assert_eq!(body["data"], "2024-01-10");
    assert_eq!(body["turno"], "manhã");
    assert_eq!(body["km_rodado"], 120.0);
    assert_eq!(body["ganho_bruto"], 250.5);
    assert_eq!(body["combustivel_informado"], 30.0);
    assert_eq!(body["hora_inicio"], "08:00");
    assert_eq!(body["hora_fim"], "16:00");
    assert_eq!(body["observacoes"], "ok");
}

#[sqlx::test]
#[ignore = "requiere PostgreSQL accesible en DATABASE_URL"]
async fn test_lista_ordenada_por_data_descendente(pool: PgPool) {
    let app = create_db_app(pool).await;

    // Inserción en orden mezclado: D2, D1, D3
    for data in ["2024-01-05", "2024-01-10", "2024-01-01"] {
        let (status, _) =
            request(&app, "POST", "/dia-trabalho", Some(dia_trabalho_payload(data))).await;
        assert_eq!(status, StatusCode::CREATED);
    }

    let (status, body) = request(&app, "GET", "/dia-trabalho", None).await;
    assert_eq!(status, StatusCode::OK);

    let datas: Vec<&str> = body
        .as_array()
        .expect("array")
        .iter()
        .map(|dia| dia["data"].as_str().unwrap())
        .collect();
    assert_eq!(datas, ["2024-01-10", "2024-01-05", "2024-01-01"]);
}

#[sqlx::test]
#[ignore = "requiere PostgreSQL accesible en DATABASE_URL"]
async fn test_put_id_inexistente_404_y_no_modifica(pool: PgPool) {
    let app = create_db_app(pool.clone()).await;

    let (_, creado) =
        request(&app, "POST", "/dia-trabalho", Some(dia_trabalho_payload("2024-01-10"))).await;

    let (status, body) = request(
        &app,
        "PUT",
        "/dia-trabalho/9999",
        Some(dia_trabalho_payload("2030-12-31")),
    )
    .await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Não encontrado");

    // La fila existente queda intacta
    let (_, lista) = request(&app, "GET", "/dia-trabalho", None).await;
    assert_eq!(lista.as_array().unwrap().len(), 1);
    assert_eq!(lista[0]["id"], creado["id"]);
    assert_eq!(lista[0]["data"], "2024-01-10");
}

#[sqlx::test]
#[ignore = "requiere PostgreSQL accesible en DATABASE_URL"]
async fn test_put_sobreescribe_fila_completa(pool: PgPool) {
    let app = create_db_app(pool).await;

    let (_, creado) =
        request(&app, "POST", "/dia-trabalho", Some(dia_trabalho_payload("2024-01-10"))).await;
    let id = creado["id"].as_i64().unwrap();

    let (status, body) = request(
        &app,
        "PUT",
        &format!("/dia-trabalho/{}", id),
        Some(dia_trabalho_payload("2024-02-20")),
    )
    .await;

    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["id"], id);
    assert_eq!(body["data"], "2024-02-20");
}

#[sqlx::test]
#[ignore = "requiere PostgreSQL accesible en DATABASE_URL"]
async fn test_delete_id_inexistente_404_y_conserva_filas(pool: PgPool) {
    let app = create_db_app(pool).await;

    request(&app, "POST", "/dia-trabalho", Some(dia_trabalho_payload("2024-01-10"))).await;

    let (status, body) = request(&app, "DELETE", "/dia-trabalho/9999", None).await;
    assert_eq!(status, StatusCode::NOT_FOUND);
    assert_eq!(body["error"], "Não encontrado");

    let (_, lista) = request(&app, "GET", "/dia-trabalho", None).await;
    assert_eq!(lista.as_array().unwrap().len(), 1);
}

#[sqlx::test]
#[ignore = "requiere PostgreSQL accesible en DATABASE_URL"]
async fn test_delete_existente_ok(pool: PgPool) {
    let app = create_db_app(pool).await;

    let (_, creado) =
        request(&app, "POST", "/dia-trabalho", Some(dia_trabalho_payload("2024-01-10"))).await;
    let id = creado["id"].as_i64().unwrap();

    let (status, body) = request(&app, "DELETE", &format!("/dia-trabalho/{}", id), None).await;
    assert_eq!(status, StatusCode::OK);
    assert_eq!(body["ok"], true);

    let (_, lista) = request(&app, "GET", "/dia-trabalho", None).await;
    assert_eq!(lista.as_array().unwrap().len(), 0);
}

#[sqlx::test]
#[ignore = "requiere PostgreSQL accesible en DATABASE_URL"]
async fn test_create_abastecimento_devuelve_campos_e_id(pool: PgPool) {
    let app = create_db_app(pool).await;

    let payload = json!({
        "data": "2024-01-12",
        "hora": "14:30",
        "valor_abastecido": 150.0,
        "litros": 27.3,
        "preco_por_litro": 5.49,
        "observacoes": "posto da esquina"
    });

    let (status, body) = request(&app, "POST", "/abastecimentos", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].is_i64());
    assert_eq!(body["data"], "2024-01-12");
    assert_eq!(body["litros"], 27.3);

    let (_, lista) = request(&app, "GET", "/abastecimentos", None).await;
    assert_eq!(lista.as_array().unwrap().len(), 1);
}

#[sqlx::test]
#[ignore = "requiere PostgreSQL accesible en DATABASE_URL"]
async fn test_troca_de_oleo_actualiza_controle(pool: PgPool) {
    let app = create_db_app(pool.clone()).await;

    let payload = json!({
        "data": "2024-02-01",
        "hora": "10:00",
        "tipo_manutencao": "Troca de Óleo",
        "descricao": "óleo sintético",
        "custo": 180.0,
        "quilometragem_km": 45000,
        "local_oficina": "oficina central"
    });

    let (status, body) = request(&app, "POST", "/manutencoes", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].is_i64());
    assert_eq!(body["tipo_manutencao"], "Troca de Óleo");

    let controle = controle_oleo(&pool).await;
    assert_eq!(
        controle.data_ultima_troca,
        NaiveDate::from_ymd_opt(2024, 2, 1)
    );
    assert!(controle.atualizado_em.is_some());
}

#[sqlx::test]
#[ignore = "requiere PostgreSQL accesible en DATABASE_URL"]
async fn test_revisao_geral_no_toca_controle(pool: PgPool) {
    let app = create_db_app(pool.clone()).await;

    let payload = json!({
        "data": "2024-02-01",
        "hora": "10:00",
        "tipo_manutencao": "Revisão geral",
        "descricao": "revisão de rotina",
        "custo": 300.0,
        "quilometragem_km": 45000,
        "local_oficina": "oficina central"
    });

    let (status, _) = request(&app, "POST", "/manutencoes", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);

    // La fila singleton sembrada por el esquema sigue sin fecha
    let controle = controle_oleo(&pool).await;
    assert_eq!(controle.data_ultima_troca, None);
}

#[sqlx::test]
#[ignore = "requiere PostgreSQL accesible en DATABASE_URL"]
async fn test_controle_vacio_no_es_error(pool: PgPool) {
    let app = create_db_app(pool.clone()).await;

    sqlx::query("DELETE FROM controle_oleo")
        .execute(&pool)
        .await
        .unwrap();

    let payload = json!({
        "data": "2024-02-01",
        "tipo_manutencao": "troca de oleo"
    });

    // Sin fila singleton el update afecta cero filas y no es un error
    let (status, body) = request(&app, "POST", "/manutencoes", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].is_i64());
}

#[sqlx::test]
#[ignore = "requiere PostgreSQL accesible en DATABASE_URL"]
async fn test_fallo_del_efecto_secundario_mantiene_201(pool: PgPool) {
    let app = create_db_app(pool.clone()).await;

    // Sin la tabla, el update del efecto secundario falla de verdad
    pool.execute("DROP TABLE controle_oleo").await.unwrap();

    let payload = json!({
        "data": "2024-02-01",
        "tipo_manutencao": "Troca de Óleo"
    });

    let (status, body) = request(&app, "POST", "/manutencoes", Some(payload)).await;
    assert_eq!(status, StatusCode::CREATED);
    assert!(body["id"].is_i64());

    // El insert principal quedó confirmado
    let (_, lista) = request(&app, "GET", "/manutencoes", None).await;
    assert_eq!(lista.as_array().unwrap().len(), 1);
}
