use common::error::AppError;
use sqlx::error::ErrorKind;

/// A named constraint together with the message to surface when it fires,
/// e.g. `("orders_driver_id_fkey", "Driver with id 999 does not exist")`.
pub type ConstraintMessage<'a> = (&'a str, String);

/// Translates a storage error raised by a write into the application error
/// taxonomy using the driver's structured error kind and constraint name.
///
/// Unique-constraint collisions become `DuplicateKey`, foreign-key failures
/// become `ForeignKeyViolation` with the message registered for the
/// specific constraint. Anything else passes through as a generic storage
/// error. Classification never inspects the human-readable error text.
pub fn write_error(
    err: sqlx::Error,
    uniques: &[ConstraintMessage<'_>],
    foreign_keys: &[ConstraintMessage<'_>],
) -> AppError {
    let Some(db_err) = err.as_database_error() else {
        return AppError::Database(err);
    };

    match db_err.kind() {
        ErrorKind::UniqueViolation => {
            let details = constraint_message(db_err.constraint(), uniques)
                .unwrap_or_else(|| "A record with this key already exists".to_string());
            AppError::DuplicateKey(details)
        }
        ErrorKind::ForeignKeyViolation => {
            let details = constraint_message(db_err.constraint(), foreign_keys)
                .unwrap_or_else(|| "Referenced record does not exist".to_string());
            AppError::ForeignKeyViolation(details)
        }
        _ => AppError::Database(err),
    }
}

fn constraint_message(
    constraint: Option<&str>,
    known: &[ConstraintMessage<'_>],
) -> Option<String> {
    let name = constraint?;
    known
        .iter()
        .find(|(candidate, _)| *candidate == name)
        .map(|(_, message)| message.clone())
}

/// Formats the message for a dangling reference to `entity`, carrying the
/// offending id when the payload supplied one.
pub fn missing_reference(entity: &str, id: Option<i32>) -> String {
    match id {
        Some(id) => format!("{entity} with id {id} does not exist"),
        None => format!("Referenced {entity} does not exist"),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_constraint_resolves_to_registered_message() {
        let fks = [(
            "orders_driver_id_fkey",
            "Driver with id 999 does not exist".to_string(),
        )];
        assert_eq!(
            constraint_message(Some("orders_driver_id_fkey"), &fks).as_deref(),
            Some("Driver with id 999 does not exist")
        );
    }

    #[test]
    fn unknown_constraint_falls_through() {
        let fks = [(
            "orders_driver_id_fkey",
            "Driver with id 999 does not exist".to_string(),
        )];
        assert!(constraint_message(Some("orders_user_id_fkey"), &fks).is_none());
        assert!(constraint_message(None, &fks).is_none());
    }

    #[test]
    fn missing_reference_names_entity_and_id() {
        assert_eq!(
            missing_reference("Driver", Some(999)),
            "Driver with id 999 does not exist"
        );
        assert_eq!(
            missing_reference("Dispatcher", None),
            "Referenced Dispatcher does not exist"
        );
    }

    #[test]
    fn non_database_errors_stay_generic() {
        let err = write_error(sqlx::Error::PoolClosed, &[], &[]);
        assert!(matches!(err, AppError::Database(_)));
    }
}
