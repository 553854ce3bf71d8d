//! Tables: single units of seating capacity.

use crate::core::{Guest, SeatingError};

/// Ordinal table number.
pub type TableId = u32;

/// A table holding at most one guest.
#[derive(Debug)]
pub struct Table {
    id: TableId,
    occupant: Option<Guest>,
}

impl Table {
    /// Create a free table.
    #[must_use]
    pub const fn new(id: TableId) -> Self {
        Self { id, occupant: None }
    }

    /// Create `count` free tables numbered from 1.
    #[must_use]
    pub fn numbered(count: usize) -> Vec<Self> {
        (1..=count)
            .map(|n| Self::new(TableId::try_from(n).unwrap_or(TableId::MAX)))
            .collect()
    }

    /// Table number.
    #[must_use]
    pub const fn id(&self) -> TableId {
        self.id
    }

    /// True when nobody is seated here.
    #[must_use]
    pub const fn is_free(&self) -> bool {
        self.occupant.is_none()
    }

    /// The seated guest, if any.
    #[must_use]
    pub const fn occupant(&self) -> Option<&Guest> {
        self.occupant.as_ref()
    }

    pub(crate) fn occupant_mut(&mut self) -> Option<&mut Guest> {
        self.occupant.as_mut()
    }

    /// Seat a guest.
    ///
    /// # Errors
    ///
    /// Returns [`SeatingError::TableOccupied`] if someone is already seated.
    pub fn assign(&mut self, guest: Guest) -> Result<(), SeatingError> {
        if let Some(current) = &self.occupant {
            return Err(SeatingError::TableOccupied {
                table: self.id,
                occupant: current.name().to_string(),
            });
        }
        self.occupant = Some(guest);
        Ok(())
    }

    /// Clear the table and hand back the guest who was seated.
    ///
    /// # Errors
    ///
    /// Returns [`SeatingError::TableAlreadyFree`] if the table was empty.
    pub fn release(&mut self) -> Result<Guest, SeatingError> {
        self.occupant
            .take()
            .ok_or(SeatingError::TableAlreadyFree(self.id))
    }
}
