/// Default page size for collection listings.
pub fn default_step() -> i64 {
    10
}
