//! Record id generation

use uuid::Uuid;

use crate::models::BookId;

const BASE36: &[u8; 36] = b"0123456789abcdefghijklmnopqrstuvwxyz";

/// Number of random characters after the `b` prefix
const RANDOM_LEN: usize = 7;

/// Source of ids for newly added records
pub trait IdGenerator {
    fn next_id(&mut self) -> BookId;
}

/// Random ids: `b` followed by 7 base-36 characters
///
/// Collisions are possible but negligible; the add flow draws again when
/// an id is already taken.
#[derive(Debug, Default, Clone, Copy)]
pub struct RandomIds;

impl IdGenerator for RandomIds {
    fn next_id(&mut self) -> BookId {
        let mut bits = Uuid::new_v4().as_u128();
        let mut id = String::with_capacity(RANDOM_LEN + 1);
        id.push('b');
        for _ in 0..RANDOM_LEN {
            id.push(BASE36[(bits % 36) as usize] as char);
            bits /= 36;
        }
        BookId::new(id)
    }
}

/// Monotonic ids: `b1001`, `b1002`, ...
///
/// Deterministic; useful in tests and for reproducible demos.
#[derive(Debug, Clone)]
pub struct SequentialIds {
    next: u64,
}

impl SequentialIds {
    pub fn starting_at(next: u64) -> Self {
        Self { next }
    }
}

impl Default for SequentialIds {
    fn default() -> Self {
        Self::starting_at(1001)
    }
}

impl IdGenerator for SequentialIds {
    fn next_id(&mut self) -> BookId {
        let id = BookId::new(format!("b{}", self.next));
        self.next += 1;
        id
    }
}

impl<G: IdGenerator + ?Sized> IdGenerator for Box<G> {
    fn next_id(&mut self) -> BookId {
        (**self).next_id()
    }
}
