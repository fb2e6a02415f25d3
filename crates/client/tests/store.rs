use axum::{
    Json, Router,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::get,
};
use client::{
    api::ApiClient,
    form::{FormError, ReservationForm},
    store::{FETCH_ERROR, LabData},
};
use serde_json::{Value, json};
use std::sync::{
    Arc,
    atomic::{AtomicBool, Ordering},
};

fn reservation() -> Value {
    json!({
        "codigo": 7,
        "data_hora_inicio": "2099-01-05T08:00:00",
        "data_hora_fim": "2099-01-05T10:00:00",
        "cpf_professor": "111.111.111-11",
        "cod_disciplina": 1,
        "cod_turma": 1,
        "cod_laboratorio": 1,
        "status": "PENDENTE",
        "created_at": "2098-12-01T09:00:00",
        "professor_nome": "Ana Souza",
        "disciplina_nome": "Cálculo I",
        "turma_nome": "Turma A",
        "laboratorio_nome": "Química",
    })
}

fn catalog() -> Router {
    Router::new()
        .route("/laboratorios", get(|| async {
            Json(json!([{
                "codigo": 1,
                "nome": "Química",
                "especialidade": "Química orgânica",
                "horario_funcionamento": "Seg-Sex 07:00-22:00",
            }]))
        }))
        .route("/professores", get(|| async {
            Json(json!([{ "cpf": "111.111.111-11", "nome": "Ana Souza", "email": null }]))
        }))
        .route("/disciplinas", get(|| async {
            Json(json!([{ "codigo": 1, "nome": "Cálculo I", "carga_horaria": 60 }]))
        }))
        .route("/turmas", get(|| async {
            Json(json!([{ "codigo": 1, "nome": "Turma A", "ano": 2099, "semestre": 1 }]))
        }))
}

/// Serves `router` on an ephemeral port and returns its base URL
async fn serve(router: Router) -> String {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, router).await.unwrap();
    });
    format!("http://{addr}")
}

#[tokio::test]
async fn test_connect_loads_every_collection() {
    let router = catalog().route("/reservas", get(|| async { Json(json!([reservation()])) }));
    let store = LabData::connect(ApiClient::new(&serve(router).await)).await;

    assert_eq!(store.error(), None);
    assert!(!store.is_loading());

    let data = store.data();
    assert_eq!(data.reservations.len(), 1);
    assert_eq!(data.reservations[0].reservation.code, 7);
    assert_eq!(data.reservations[0].laboratory_name.as_deref(), Some("Química"));
    assert_eq!(data.laboratories[0].name, "Química");
    assert_eq!(data.professors[0].cpf, "111.111.111-11");
    assert_eq!(data.disciplines[0].credit_hours, Some(60));
    assert_eq!(data.class_groups[0].year, 2099);
}

#[tokio::test]
async fn test_failed_fetch_sets_error_and_keeps_nothing_partial() {
    let router = catalog().route(
        "/reservas",
        get(|| async { (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "boom" }))) }),
    );
    let store = LabData::connect(ApiClient::new(&serve(router).await)).await;

    assert_eq!(store.error(), Some(FETCH_ERROR));
    assert!(!store.is_loading());
    assert!(store.data().laboratories.is_empty());
    assert!(store.data().reservations.is_empty());
}

async fn reservations_or_outage(State(down): State<Arc<AtomicBool>>) -> Response {
    if down.load(Ordering::SeqCst) {
        return (StatusCode::INTERNAL_SERVER_ERROR, Json(json!({ "error": "boom" }))).into_response();
    }
    Json(json!([reservation()])).into_response()
}

#[tokio::test]
async fn test_failed_refetch_keeps_previous_data() {
    let down = Arc::new(AtomicBool::new(false));
    let router = catalog().route(
        "/reservas",
        get(reservations_or_outage).with_state(down.clone()),
    );
    let mut store = LabData::connect(ApiClient::new(&serve(router).await)).await;
    assert_eq!(store.error(), None);
    let loaded = store.data().clone();
    assert_eq!(loaded.reservations.len(), 1);

    down.store(true, Ordering::SeqCst);
    store.refetch().await;

    assert_eq!(store.error(), Some(FETCH_ERROR));
    assert!(!store.is_loading());
    assert_eq!(store.data(), &loaded);

    down.store(false, Ordering::SeqCst);
    store.refetch().await;
    assert_eq!(store.error(), None);
}

#[tokio::test]
async fn test_submit_localizes_server_rejection() {
    let router = catalog().route(
        "/reservas",
        get(|| async { Json(json!([])) }).post(|| async {
            (
                StatusCode::BAD_REQUEST,
                Json(json!({ "error": "O laboratório já está reservado neste intervalo." })),
            )
        }),
    );
    let store = LabData::connect(ApiClient::new(&serve(router).await)).await;

    let mut form = ReservationForm::create(Some(1), &store.data().laboratories);
    form.fields.starts_at = "2099-01-05T08:00".to_string();
    form.fields.ends_at = "2099-01-05T10:00".to_string();
    form.fields.professor_cpf = "111.111.111-11".to_string();
    form.fields.discipline_code = 1;
    form.fields.class_code = 1;

    let err = form.submit(store.api()).await.unwrap_err();
    assert_eq!(
        err,
        FormError::Rejected(
            "🔒 O laboratório já está reservado neste intervalo de horário. Escolha outro horário."
                .to_string()
        )
    );
}
