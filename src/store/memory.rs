use super::*;

/// Keeps contacts only for the lifetime of the value. Saving is a no-op.
#[derive(Default)]
pub struct MemStore {
    pub data: ContactBook,
}

impl MemStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl ContactStore for MemStore {
    fn load(&self) -> Result<ContactBook, AppError> {
        Ok(self.data.clone())
    }

    fn save(&self, _contacts: &ContactBook) -> Result<(), AppError> {
        Ok(())
    }
}
