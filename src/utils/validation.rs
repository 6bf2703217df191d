use crate::utils::error::{PairError, Result};

pub trait Validate {
    fn validate(&self) -> Result<()>;
}

pub fn validate_divisor(k: i32) -> Result<()> {
    if k == 0 {
        return Err(PairError::InvalidDivisor);
    }
    Ok(())
}

/// The declared length is optional; when given it has to match the values.
pub fn validate_declared_len(field_name: &str, declared: Option<usize>, actual: usize) -> Result<()> {
    match declared {
        Some(n) if n != actual => Err(PairError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: n.to_string(),
            reason: format!("Declared length does not match the {} supplied values", actual),
        }),
        _ => Ok(()),
    }
}

pub fn validate_path(field_name: &str, path: &str) -> Result<()> {
    if path.is_empty() {
        return Err(PairError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path cannot be empty".to_string(),
        });
    }

    if path.contains('\0') {
        return Err(PairError::InvalidConfigValueError {
            field: field_name.to_string(),
            value: path.to_string(),
            reason: "Path contains null bytes".to_string(),
        });
    }

    Ok(())
}

pub fn validate_required_field<'a, T>(field_name: &str, value: &'a Option<T>) -> Result<&'a T> {
    value.as_ref().ok_or_else(|| PairError::MissingConfigError {
        field: field_name.to_string(),
    })
}
