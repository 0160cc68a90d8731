use std::net::SocketAddr;
use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};
use std::time::Duration;

use axum::{Json, Router, routing::post};
use reqwest::Url;
use rstest::{fixture, rstest};
use serde_json::json;

use crate::modules::registration::adapters::inbound::headless_view::HeadlessFormView;
use crate::modules::registration::adapters::outbound::http_gateway::HttpRegistrationGateway;
use crate::modules::registration::controller::RegistrationFormController;
use crate::modules::registration::core::fields::{FieldMark, FormField};
use crate::modules::registration::core::input::RegistrationInput;
use crate::modules::registration::core::messages::CONNECTION_FAILED;
use crate::modules::registration::core::state::SubmissionState;
use crate::modules::registration::ports::{Banner, FormView};
use crate::tests::fixtures::mock_backend::{FakeDatabase, REGISTRATION_PATH, router, spawn};
use crate::tests::fixtures::registration_input::RegistrationInputBuilder;

type Controller = RegistrationFormController<HttpRegistrationGateway>;

fn controller_for(addr: SocketAddr) -> Controller {
    let endpoint = Url::parse(&format!("http://{addr}{REGISTRATION_PATH}")).unwrap();
    let gateway = HttpRegistrationGateway::new(endpoint, Duration::from_secs(5)).unwrap();
    RegistrationFormController::new(Arc::new(gateway))
}

/// Mock backend with a fresh store, the way every case starts.
#[fixture]
async fn backend() -> (Controller, FakeDatabase) {
    let db = FakeDatabase::new();
    db.reset().await;
    let addr = spawn(router(db.clone())).await;
    (controller_for(addr), db)
}

async fn fill_and_submit(
    controller: &Controller,
    input: &RegistrationInput,
) -> (HeadlessFormView, SubmissionState) {
    let mut view = HeadlessFormView::with_input(input);
    let state = controller.on_submit(&mut view).await;
    (view, state)
}

#[rstest]
#[tokio::test]
async fn submits_a_valid_registration_and_greets_the_user() {
    let app = Router::new().route(
        REGISTRATION_PATH,
        post(|| async { Json(json!({ "mensaje": "ok" })) }),
    );
    let controller = controller_for(spawn(app).await);
    let input = RegistrationInputBuilder::new()
        .name("Ana Pérez")
        .email("ana@empresa.com.ar")
        .age("28")
        .passwords("Segura123!")
        .build();

    let (view, state) = fill_and_submit(&controller, &input).await;

    assert_eq!(
        view.banner(),
        Some(&Banner::Success(
            "Registro exitoso. Bienvenido/a, Ana Pérez!".into()
        ))
    );
    for field in FormField::ALL {
        assert_eq!(view.value(field), "", "{field} should be reset");
        assert_eq!(view.mark(field), FieldMark::Neutral);
    }
    assert!(matches!(state, SubmissionState::Succeeded { .. }));
    assert!(!view.is_loading());
}

#[rstest]
#[tokio::test]
async fn stores_a_valid_user_in_the_mock_backend(
    #[future] backend: (Controller, FakeDatabase),
) {
    let (controller, db) = backend.await;
    let input = RegistrationInputBuilder::new()
        .name("Valentina Test")
        .email("valentina@empresa.com.ar")
        .age("30")
        .passwords("prueba123")
        .build();

    let (view, _) = fill_and_submit(&controller, &input).await;

    assert_eq!(
        view.banner().map(Banner::text),
        Some("Registro exitoso. Bienvenido/a, Valentina Test!")
    );
    let users = db.users().await;
    assert_eq!(users.len(), 1);
    assert_eq!(users[0]["email"], "valentina@empresa.com.ar");
    assert_eq!(users[0]["nombre"], "Valentina Test");
    assert_eq!(users[0]["edad"], "30");
}

#[rstest]
#[tokio::test]
async fn blocks_an_email_outside_the_corporate_domain_without_a_request() {
    let requests = Arc::new(AtomicUsize::new(0));
    let counter = requests.clone();
    let app = Router::new().route(
        REGISTRATION_PATH,
        post(move || {
            let counter = counter.clone();
            async move {
                counter.fetch_add(1, Ordering::SeqCst);
                Json(json!({ "mensaje": "ok" }))
            }
        }),
    );
    let controller = controller_for(spawn(app).await);
    let input = RegistrationInputBuilder::new()
        .name("Carlos")
        .email("carlos@gmail.com")
        .age("32")
        .passwords("claveSegura1")
        .build();

    let (view, state) = fill_and_submit(&controller, &input).await;

    assert_eq!(
        view.field_error(FormField::Email),
        Some("El email debe pertenecer al dominio @empresa.com.ar")
    );
    assert!(matches!(state, SubmissionState::Invalid { .. }));
    assert_eq!(requests.load(Ordering::SeqCst), 0);
    assert_eq!(view.value(FormField::Email), "carlos@gmail.com");
}

#[rstest]
#[case("ana@empresa")]
#[case("luisempresa.com.ar")]
#[case("correo_invalido")]
#[tokio::test]
async fn reports_a_malformed_email(
    #[future] backend: (Controller, FakeDatabase),
    #[case] email: &str,
) {
    let (controller, db) = backend.await;
    let input = RegistrationInputBuilder::new().email(email).build();

    let (view, _) = fill_and_submit(&controller, &input).await;

    assert_eq!(
        view.field_error(FormField::Email),
        Some("Formato de email inválido")
    );
    assert!(db.users().await.is_empty());
}

#[rstest]
#[tokio::test]
async fn reports_mismatched_passwords(#[future] backend: (Controller, FakeDatabase)) {
    let (controller, db) = backend.await;
    let input = RegistrationInputBuilder::new()
        .name("Carla Ruiz")
        .email("carla@empresa.com.ar")
        .age("25")
        .password("Clave123!")
        .password_confirmation("Otra123!")
        .build();

    let (view, _) = fill_and_submit(&controller, &input).await;

    assert_eq!(
        view.field_error(FormField::Confirmation),
        Some("Las contraseñas no coinciden")
    );
    assert!(db.users().await.is_empty());
}

#[rstest]
#[tokio::test]
async fn shows_the_duplicate_email_message_on_the_email_field(
    #[future] backend: (Controller, FakeDatabase),
) {
    let (controller, db) = backend.await;
    let input = RegistrationInputBuilder::new()
        .name("Valentina Test")
        .email("valentina@empresa.com.ar")
        .age("30")
        .passwords("Password123")
        .build();
    db.seed(serde_json::to_value(&input).unwrap()).await;

    let (view, state) = fill_and_submit(&controller, &input).await;

    assert_eq!(
        view.field_error(FormField::Email),
        Some("El email ya está registrado.")
    );
    assert_eq!(view.banner(), None);
    assert!(matches!(
        state,
        SubmissionState::Rejected {
            field: Some(FormField::Email),
            ..
        }
    ));
    assert_eq!(db.users().await.len(), 1);
}

#[rstest]
#[tokio::test]
async fn reports_every_empty_required_field(#[future] backend: (Controller, FakeDatabase)) {
    let (controller, _) = backend.await;

    let (view, _) = fill_and_submit(&controller, &RegistrationInput::default()).await;

    assert_eq!(view.field_error(FormField::Name), Some("El nombre es obligatorio"));
    assert_eq!(view.field_error(FormField::Email), Some("El email es obligatorio"));
    assert_eq!(
        view.field_error(FormField::Password),
        Some("La contraseña es obligatoria")
    );
    assert_eq!(
        view.field_error(FormField::Confirmation),
        Some("Debe confirmar la contraseña")
    );
    assert_eq!(view.field_error(FormField::Age), None);
}

#[rstest]
#[case("-5")]
#[case("150")]
#[tokio::test]
async fn reports_an_age_out_of_range(
    #[future] backend: (Controller, FakeDatabase),
    #[case] age: &str,
) {
    let (controller, _) = backend.await;
    let input = RegistrationInputBuilder::new().age(age).build();

    let (view, _) = fill_and_submit(&controller, &input).await;

    assert_eq!(
        view.field_error(FormField::Age),
        Some("La edad debe ser un número entre 18 y 99 años")
    );
}

#[rstest]
#[tokio::test]
async fn registers_without_an_age(#[future] backend: (Controller, FakeDatabase)) {
    let (controller, db) = backend.await;
    let input = RegistrationInputBuilder::new().age("").build();

    let (_, state) = fill_and_submit(&controller, &input).await;

    assert!(matches!(state, SubmissionState::Succeeded { .. }));
    assert_eq!(db.users().await[0]["edad"], "");
}

#[rstest]
#[tokio::test]
async fn shows_a_connection_error_when_the_backend_is_unreachable() {
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    drop(listener);
    let controller = controller_for(addr);

    let (view, state) =
        fill_and_submit(&controller, &RegistrationInputBuilder::new().build()).await;

    assert_eq!(view.banner(), Some(&Banner::Error(CONNECTION_FAILED.into())));
    assert_eq!(
        state,
        SubmissionState::Failed {
            message: CONNECTION_FAILED.into()
        }
    );
    assert_eq!(view.loading_history(), &[true, false]);
}

#[rstest]
#[tokio::test]
async fn allows_a_retry_after_fixing_the_input(#[future] backend: (Controller, FakeDatabase)) {
    let (controller, db) = backend.await;
    let input = RegistrationInputBuilder::new().email("ana@gmail.com").build();
    let mut view = HeadlessFormView::with_input(&input);

    let first = controller.on_submit(&mut view).await;
    assert!(matches!(first, SubmissionState::Invalid { .. }));

    view.set_value(FormField::Email, "ana@empresa.com.ar");
    controller.on_email_input(&mut view).await;
    let second = controller.on_submit(&mut view).await;

    assert!(matches!(second, SubmissionState::Succeeded { .. }));
    assert_eq!(view.field_error(FormField::Email), None);
    assert_eq!(db.users().await.len(), 1);
}
