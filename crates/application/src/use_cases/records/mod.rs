pub mod delete;
pub mod get;
pub mod set;

pub use delete::DeleteRecordUseCase;
pub use get::GetRecordUseCase;
pub use set::SetRecordUseCase;

use mockapetris_domain::DomainError;

fn validate_name(name: &str) -> Result<(), DomainError> {
    if name.is_empty() {
        return Err(DomainError::InvalidDomainName(
            "Hostname cannot be empty".to_string(),
        ));
    }
    Ok(())
}
