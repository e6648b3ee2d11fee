use serde::Serialize;

#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct User {
    pub id: i32,
    pub name: String,
    pub surname: String,
    pub email: String,
    // One-way argon2 hash, never serialized into responses.
    #[serde(skip_serializing)]
    pub hashed_password: String,
    pub phone_number: String,
    pub is_active: bool,
    pub is_superuser: bool,
    pub is_verified: bool,
}

/// Projection returned to the owner of a bearer token.
#[derive(Debug, Clone, sqlx::FromRow, Serialize)]
pub struct Identity {
    pub id: i32,
    pub email: String,
    pub name: String,
    pub surname: String,
    pub phone_number: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn password_hash_is_never_serialized() {
        let user = User {
            id: 1,
            name: "name".to_string(),
            surname: "surname".to_string(),
            email: "a@x.com".to_string(),
            hashed_password: "$argon2id$v=19$secret".to_string(),
            phone_number: "+7 (912) 345-67-89".to_string(),
            is_active: true,
            is_superuser: false,
            is_verified: false,
        };
        let value = serde_json::to_value(&user).unwrap();
        assert!(value.get("hashed_password").is_none());
        assert_eq!(value["email"], "a@x.com");
    }
}
