//! Interactive registration commands: `create` and `update`.
//!
//! Both drive a [`RegistrationForm`] through a prompt loop. Entering an
//! 8-digit CEP triggers the ViaCEP lookup, and the auto-filled values
//! become the defaults for the follow-up prompts. Invalid drafts are
//! reported field by field and re-prompted with the entered values kept.

use std::error::Error;
use std::io;

use cadastro_registration::form::{
    CustomerDraft, validate_birth_date, validate_cep, validate_cpf, validate_email, validate_name,
    validate_required, validate_uf,
};
use cadastro_registration::services::{CustomerClient, ViaCepClient};
use cadastro_registration::{RegistrationConfig, RegistrationForm, SubmitOutcome};

use super::{confirm, prompt_with_default};

/// Register a new customer interactively.
pub async fn create(config: &RegistrationConfig) -> Result<(), Box<dyn Error>> {
    let viacep = ViaCepClient::new(&config.viacep_base_url);
    let customers = CustomerClient::new(&config.customer_api_url);

    let mut form = RegistrationForm::new();

    loop {
        fill(&mut form, &viacep).await?;

        match form.submit(&customers).await {
            SubmitOutcome::Created(record) => {
                println!("Cliente criado com sucesso! id={}", record.id);
                return Ok(());
            }
            SubmitOutcome::Invalid => {
                println!("Formulario invalido:");
                report_errors(form.draft());
                println!("Corrija os campos e tente novamente.");
            }
            SubmitOutcome::Failed(err) => {
                println!("Nao foi possivel salvar o cliente. Tente novamente.");
                return Err(err.into());
            }
        }
    }
}

/// Re-enter a customer's data and update it by id.
pub async fn update(config: &RegistrationConfig, id: &str) -> Result<(), Box<dyn Error>> {
    let viacep = ViaCepClient::new(&config.viacep_base_url);
    let customers = CustomerClient::new(&config.customer_api_url);

    let mut form = RegistrationForm::new();

    loop {
        fill(&mut form, &viacep).await?;
        form.draft_mut().touch_all();

        if !form.draft().is_valid() {
            println!("Formulario invalido:");
            report_errors(form.draft());
            println!("Corrija os campos e tente novamente.");
            continue;
        }

        let record = customers.update(id, &form.draft().to_request()).await?;
        println!("Cliente {} atualizado.", record.id);
        return Ok(());
    }
}

/// Prompt for every field; current draft values are the defaults, so
/// retry passes only require re-typing what changed.
async fn fill(form: &mut RegistrationForm, viacep: &ViaCepClient) -> io::Result<()> {
    {
        let draft = form.draft_mut();
        let name = prompt_with_default("Nome", draft.name.value())?;
        draft.name.set(name);
        let email = prompt_with_default("Email", draft.email.value())?;
        draft.email.set(email);
        let cpf = prompt_with_default("CPF (11 digitos)", draft.cpf.value())?;
        draft.cpf.set(cpf);
        let birth_date =
            prompt_with_default("Data de nascimento (aaaa-mm-dd)", draft.birth_date.value())?;
        draft.birth_date.set(birth_date);
    }

    let mut index = 0;
    loop {
        println!("-- Endereco {}", index + 1);
        fill_address(form, index, viacep).await?;
        index += 1;

        // On a retry pass, walk the rows that already exist first
        if index < form.draft().addresses().len() {
            continue;
        }
        if confirm("Adicionar outro endereco?")? {
            form.add_address();
        } else {
            return Ok(());
        }
    }
}

async fn fill_address(
    form: &mut RegistrationForm,
    index: usize,
    viacep: &ViaCepClient,
) -> io::Result<()> {
    {
        let Some(row) = form.draft_mut().address_mut(index) else {
            return Ok(());
        };
        let cep = prompt_with_default("CEP (8 digitos)", row.postal_code.value())?;
        row.postal_code.set(cep);
    }

    let outcome = form.lookup_postal_code(index, viacep).await;
    if let Some(notice) = outcome.notice() {
        println!("{notice}");
    }

    let Some(row) = form.draft_mut().address_mut(index) else {
        return Ok(());
    };

    let street = prompt_with_default("Logradouro", row.street.value())?;
    row.street.set(street);
    let number = prompt_with_default("Numero", row.number.value())?;
    row.number.set(number);
    let complement = prompt_with_default("Complemento", row.complement.value())?;
    row.complement.set(complement);
    let neighborhood = prompt_with_default("Bairro", row.neighborhood.value())?;
    row.neighborhood.set(neighborhood);
    let city = prompt_with_default("Cidade", row.city.value())?;
    row.city.set(city);
    let state_code = prompt_with_default("UF", row.state_code.value())?;
    row.state_code.set(state_code);

    Ok(())
}

/// Print every failing field with its validation message.
fn report_errors(draft: &CustomerDraft) {
    let customer_fields = [
        ("Nome", validate_name(&draft.name)),
        ("Email", validate_email(&draft.email)),
        ("CPF", validate_cpf(&draft.cpf)),
        ("Data de nascimento", validate_birth_date(&draft.birth_date)),
    ];
    for (label, error) in customer_fields {
        if let Some(error) = error {
            println!("  {label}: {error}");
        }
    }

    for (i, address) in draft.addresses().iter().enumerate() {
        let n = i + 1;
        let address_fields = [
            ("CEP", validate_cep(&address.postal_code)),
            ("Logradouro", validate_required(&address.street)),
            ("Numero", validate_required(&address.number)),
            ("Complemento", validate_required(&address.complement)),
            ("Bairro", validate_required(&address.neighborhood)),
            ("Cidade", validate_required(&address.city)),
            ("UF", validate_uf(&address.state_code)),
        ];
        for (label, error) in address_fields {
            if let Some(error) = error {
                println!("  Endereco {n} - {label}: {error}");
            }
        }
    }
}
