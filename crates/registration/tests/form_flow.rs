//! End-to-end form controller tests: lookup and submission flows against
//! mock HTTP servers.

use cadastro_registration::services::{CustomerClient, ViaCepClient};
use cadastro_registration::{LookupOutcome, RegistrationForm, SubmitOutcome};
use cadastro_registration::form::{LookupStatus, validate_cep};
use serde_json::json;
use wiremock::matchers::{method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

/// A form whose draft passes every validation rule.
fn valid_form() -> RegistrationForm {
    let mut form = RegistrationForm::new();
    let draft = form.draft_mut();
    draft.name.set("Maria Oliveira");
    draft.email.set("maria@example.com");
    draft.cpf.set("12345678901");
    draft.birth_date.set("1990-05-20");

    let address = draft.address_mut(0).expect("one address");
    address.postal_code.set("01001000");
    address.street.set("Praça da Sé");
    address.complement.set("Lado ímpar");
    address.number.set("100");
    address.neighborhood.set("Sé");
    address.city.set("São Paulo");
    address.state_code.set("sp");
    form
}

async fn mock_viacep_hit(server: &MockServer) {
    Mock::given(method("GET"))
        .and(path("/01001000/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({
            "cep": "01001-000",
            "logradouro": "Praça da Sé",
            "bairro": "Sé",
            "localidade": "São Paulo",
            "uf": "sp"
        })))
        .mount(server)
        .await;
}

// ────────────────────────────────────────────────────────────────────────────
// Lookup
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn invalid_cep_blocks_lookup_without_any_request() {
    let server = MockServer::start().await;

    // Zero requests allowed; verified when the server drops
    Mock::given(method("GET"))
        .respond_with(ResponseTemplate::new(200))
        .expect(0)
        .mount(&server)
        .await;

    let viacep = ViaCepClient::new(server.uri());
    let mut form = RegistrationForm::new();
    form.draft_mut()
        .address_mut(0)
        .expect("one address")
        .postal_code
        .set("123");

    let outcome = form.lookup_postal_code(0, &viacep).await;

    assert!(matches!(outcome, LookupOutcome::InvalidPostalCode));
    let row = &form.draft().addresses()[0];
    assert!(row.postal_code.touched());
    assert_eq!(row.street.value(), "");
    assert_eq!(row.lookup_status(), LookupStatus::Idle);
}

#[tokio::test]
async fn lookup_hit_fills_the_row_and_uppercases_uf() {
    let server = MockServer::start().await;
    mock_viacep_hit(&server).await;

    let viacep = ViaCepClient::new(server.uri());
    let mut form = RegistrationForm::new();
    {
        let row = form.draft_mut().address_mut(0).expect("one address");
        row.postal_code.set("01001000");
        row.complement.set("Apto 12");
        row.number.set("100");
    }

    let outcome = form.lookup_postal_code(0, &viacep).await;

    assert!(matches!(outcome, LookupOutcome::Filled));
    let row = &form.draft().addresses()[0];
    assert_eq!(row.street.value(), "Praça da Sé");
    assert_eq!(row.neighborhood.value(), "Sé");
    assert_eq!(row.city.value(), "São Paulo");
    assert_eq!(row.state_code.value(), "SP");
    // lookup never writes these
    assert_eq!(row.postal_code.value(), "01001000");
    assert_eq!(row.complement.value(), "Apto 12");
    assert_eq!(row.number.value(), "100");
    assert_eq!(row.lookup_status(), LookupStatus::Idle);
}

#[tokio::test]
async fn not_found_clears_exactly_one_row_and_flags_its_cep() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/99999999/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "erro": true })))
        .mount(&server)
        .await;

    let viacep = ViaCepClient::new(server.uri());
    let mut form = valid_form();
    form.add_address();
    {
        let row = form.draft_mut().address_mut(1).expect("second address");
        row.postal_code.set("99999999");
        row.street.set("Rua Fantasma");
        row.city.set("Lugar Nenhum");
        row.state_code.set("XX");
    }

    let outcome = form.lookup_postal_code(1, &viacep).await;

    assert!(matches!(&outcome, LookupOutcome::NotFound));
    assert_eq!(
        outcome.notice(),
        Some("CEP nao encontrado. Por favor, verifique o numero digitado.")
    );

    let row = &form.draft().addresses()[1];
    assert_eq!(row.street.value(), "");
    assert_eq!(row.neighborhood.value(), "");
    assert_eq!(row.city.value(), "");
    assert_eq!(row.state_code.value(), "");
    assert!(row.postal_code.marked_error().is_some());
    assert_eq!(row.lookup_status(), LookupStatus::Idle);

    // row 0 is unaffected
    let first = &form.draft().addresses()[0];
    assert_eq!(first.street.value(), "Praça da Sé");
    assert_eq!(first.city.value(), "São Paulo");
}

#[tokio::test]
async fn flagged_cep_blocks_relookup_until_edited() {
    let server = MockServer::start().await;

    // First answer is a miss, any later request is a hit
    Mock::given(method("GET"))
        .and(path("/01001000/json/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({ "erro": true })))
        .up_to_n_times(1)
        .expect(1)
        .mount(&server)
        .await;
    mock_viacep_hit(&server).await;

    let viacep = ViaCepClient::new(server.uri());
    let mut form = RegistrationForm::new();
    form.draft_mut()
        .address_mut(0)
        .expect("one address")
        .postal_code
        .set("01001000");

    let outcome = form.lookup_postal_code(0, &viacep).await;
    assert!(matches!(outcome, LookupOutcome::NotFound));
    assert!(form.draft().addresses()[0].postal_code.marked_error().is_some());

    // Re-triggering without editing the field must not issue a request
    let outcome = form.lookup_postal_code(0, &viacep).await;
    assert!(matches!(outcome, LookupOutcome::InvalidPostalCode));
    assert!(form.draft().addresses()[0].postal_code.marked_error().is_some());

    // Editing the field clears the flag and re-enables the lookup
    form.draft_mut()
        .address_mut(0)
        .expect("one address")
        .postal_code
        .set("01001000");

    let outcome = form.lookup_postal_code(0, &viacep).await;
    assert!(matches!(outcome, LookupOutcome::Filled));

    let row = &form.draft().addresses()[0];
    assert!(row.postal_code.marked_error().is_none());
    assert_eq!(row.city.value(), "São Paulo");
    assert_eq!(row.state_code.value(), "SP");
    // the filled row validates again: nothing invalid lingers
    assert!(validate_cep(&row.postal_code).is_none());
}

#[tokio::test]
async fn transport_failure_leaves_the_row_unchanged() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/01001000/json/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let viacep = ViaCepClient::new(server.uri());
    let mut form = valid_form();

    let outcome = form.lookup_postal_code(0, &viacep).await;

    assert!(matches!(&outcome, LookupOutcome::Failed(_)));
    assert_eq!(
        outcome.notice(),
        Some("Ocorreu um erro ao consultar o CEP. Tente novamente.")
    );

    let row = &form.draft().addresses()[0];
    assert_eq!(row.street.value(), "Praça da Sé");
    assert_eq!(row.city.value(), "São Paulo");
    assert!(row.postal_code.marked_error().is_none());
    // loading flag cleared even on failure
    assert_eq!(row.lookup_status(), LookupStatus::Failed);
}

#[tokio::test]
async fn lookup_statuses_are_independent_per_row() {
    let server = MockServer::start().await;
    mock_viacep_hit(&server).await;
    Mock::given(method("GET"))
        .and(path("/02002000/json/"))
        .respond_with(ResponseTemplate::new(500))
        .mount(&server)
        .await;

    let viacep = ViaCepClient::new(server.uri());
    let mut form = RegistrationForm::new();
    form.add_address();
    form.draft_mut()
        .address_mut(0)
        .expect("first address")
        .postal_code
        .set("01001000");
    form.draft_mut()
        .address_mut(1)
        .expect("second address")
        .postal_code
        .set("02002000");

    // Row 1 fails in transport; row 0 never left Idle
    let outcome = form.lookup_postal_code(1, &viacep).await;
    assert!(matches!(outcome, LookupOutcome::Failed(_)));
    assert_eq!(form.draft().addresses()[1].lookup_status(), LookupStatus::Failed);
    assert_eq!(form.draft().addresses()[0].lookup_status(), LookupStatus::Idle);

    // Row 0 succeeds; row 1 keeps its own status
    let outcome = form.lookup_postal_code(0, &viacep).await;
    assert!(matches!(outcome, LookupOutcome::Filled));
    assert_eq!(form.draft().addresses()[0].lookup_status(), LookupStatus::Idle);
    assert_eq!(form.draft().addresses()[0].city.value(), "São Paulo");
    assert_eq!(form.draft().addresses()[1].lookup_status(), LookupStatus::Failed);
    assert_eq!(form.draft().addresses()[1].city.value(), "");
}

#[tokio::test]
async fn lookup_on_missing_row_is_a_noop() {
    let server = MockServer::start().await;
    let viacep = ViaCepClient::new(server.uri());
    let mut form = RegistrationForm::new();

    let outcome = form.lookup_postal_code(9, &viacep).await;

    assert!(matches!(outcome, LookupOutcome::NoSuchRow));
}

// ────────────────────────────────────────────────────────────────────────────
// Submission
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn invalid_draft_submits_nothing_and_touches_everything() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201))
        .expect(0)
        .mount(&server)
        .await;

    let customers = CustomerClient::new(server.uri());
    let mut form = valid_form();
    // the short-CPF scenario
    form.draft_mut().cpf.set("123");

    let outcome = form.submit(&customers).await;

    assert!(matches!(outcome, SubmitOutcome::Invalid));
    assert!(form.submitted());
    assert!(!form.is_submitting());
    assert!(form.draft().name.touched());
    assert!(form.draft().addresses()[0].state_code.touched());
}

#[tokio::test]
async fn successful_submit_sends_normalized_payload_and_resets() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/"))
        .and(wiremock::matchers::body_json(json!({
            "nome": "Maria Oliveira",
            "email": "maria@example.com",
            "cpf": "12345678901",
            "dataNascimento": "1990-05-20",
            "enderecos": [{
                "logradouro": "Praça da Sé",
                "complemento": "Lado ímpar",
                "numero": "100",
                "bairro": "Sé",
                "cidade": "São Paulo",
                "uf": "SP",
                "cep": "01001000"
            }]
        })))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "7",
            "nome": "Maria Oliveira",
            "email": "maria@example.com",
            "cpf": "12345678901",
            "dataNascimento": "1990-05-20",
            "enderecos": []
        })))
        .expect(1)
        .mount(&server)
        .await;

    let customers = CustomerClient::new(server.uri());
    let mut form = valid_form();
    // leading/trailing whitespace and lowercase UF must be normalized
    form.draft_mut().name.set("  Maria Oliveira  ");
    form.draft_mut().email.set(" maria@example.com ");

    let outcome = form.submit(&customers).await;

    let record = match outcome {
        SubmitOutcome::Created(record) => record,
        other => panic!("expected Created, got {other:?}"),
    };
    assert_eq!(record.id, "7");

    // reset to a fresh draft
    assert!(!form.submitted());
    assert!(!form.is_submitting());
    assert_eq!(form.draft().name.value(), "");
    assert_eq!(form.draft().addresses().len(), 1);
    assert!(!form.draft().name.touched());
}

#[tokio::test]
async fn failed_submit_preserves_the_draft_for_retry() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(500).set_body_string("db down"))
        .mount(&server)
        .await;

    let customers = CustomerClient::new(server.uri());
    let mut form = valid_form();

    let outcome = form.submit(&customers).await;

    assert!(matches!(&outcome, SubmitOutcome::Failed(_)));
    assert_eq!(
        outcome.notice(),
        Some("Nao foi possivel salvar o cliente. Tente novamente.")
    );

    // nothing lost, retry possible
    assert!(form.submitted());
    assert!(!form.is_submitting());
    assert_eq!(form.draft().name.value(), "Maria Oliveira");
    assert_eq!(form.draft().addresses()[0].city.value(), "São Paulo");
    assert!(form.draft().name.touched());
}

// ────────────────────────────────────────────────────────────────────────────
// Full scenario: lookup then submit
// ────────────────────────────────────────────────────────────────────────────

#[tokio::test]
async fn maria_oliveira_registers_end_to_end() {
    let viacep_server = MockServer::start().await;
    mock_viacep_hit(&viacep_server).await;

    let api_server = MockServer::start().await;
    Mock::given(method("POST"))
        .respond_with(ResponseTemplate::new(201).set_body_json(json!({
            "id": "42",
            "nome": "Maria Oliveira",
            "email": "maria@example.com",
            "cpf": "12345678901",
            "dataNascimento": "1990-05-20",
            "enderecos": [],
            "dataCadastro": "2026-08-30T12:00:00Z"
        })))
        .expect(1)
        .mount(&api_server)
        .await;

    let viacep = ViaCepClient::new(viacep_server.uri());
    let customers = CustomerClient::new(api_server.uri());

    let mut form = RegistrationForm::new();
    let draft = form.draft_mut();
    draft.name.set("Maria Oliveira");
    draft.email.set("maria@example.com");
    draft.cpf.set("12345678901");
    draft.birth_date.set("1990-05-20");
    draft
        .address_mut(0)
        .expect("one address")
        .postal_code
        .set("01001000");

    let outcome = form.lookup_postal_code(0, &viacep).await;
    assert!(matches!(outcome, LookupOutcome::Filled));

    let row = &form.draft().addresses()[0];
    assert_eq!(row.city.value(), "São Paulo");
    assert_eq!(row.state_code.value(), "SP");

    // lookup does not fill these two
    {
        let row = form.draft_mut().address_mut(0).expect("one address");
        row.complement.set("Lado ímpar");
        row.number.set("100");
    }

    let outcome = form.submit(&customers).await;
    let record = match outcome {
        SubmitOutcome::Created(record) => record,
        other => panic!("expected Created, got {other:?}"),
    };
    assert_eq!(record.id, "42");
    assert!(record.registered_at.is_some());

    assert_eq!(form.draft().addresses().len(), 1);
    assert_eq!(form.draft().addresses()[0].postal_code.value(), "");
}
