//! Collection management commands: `list` and `delete`.

use std::error::Error;

use cadastro_core::CustomerRecord;
use cadastro_registration::RegistrationConfig;
use cadastro_registration::services::CustomerClient;

use super::confirm;

/// Print every registered customer.
pub async fn list(config: &RegistrationConfig) -> Result<(), Box<dyn Error>> {
    let customers = CustomerClient::new(&config.customer_api_url);
    let records = customers.list().await?;

    if records.is_empty() {
        println!("Nenhum cliente cadastrado.");
        return Ok(());
    }

    for record in &records {
        print_record(record);
    }
    println!("{} cliente(s).", records.len());

    Ok(())
}

/// Delete a customer by id, after confirmation.
pub async fn delete(config: &RegistrationConfig, id: &str) -> Result<(), Box<dyn Error>> {
    if !confirm(&format!("Excluir o cliente {id}?"))? {
        println!("Operacao cancelada.");
        return Ok(());
    }

    let customers = CustomerClient::new(&config.customer_api_url);
    customers.delete(id).await?;
    println!("Cliente {id} excluido.");

    Ok(())
}

fn print_record(record: &CustomerRecord) {
    println!(
        "{}  {}  {}  ({} endereco(s))",
        record.id,
        record.name,
        record.email,
        record.addresses.len()
    );
    if let Some(registered_at) = record.registered_at {
        println!("    cadastrado em {registered_at}");
    }
}
