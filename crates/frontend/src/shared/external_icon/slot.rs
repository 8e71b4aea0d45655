//! Учёт object URL для одного `ExternalIcon`.
//!
//! Каждый созданный handle освобождается ровно один раз: при смене URL,
//! при устаревшем ответе или при размонтировании.

#[derive(Debug, Default)]
pub struct IconSlot {
    generation: u64,
    handle: Option<String>,
}

#[derive(Debug, PartialEq, Eq)]
pub enum Completion {
    /// The handle is now owned by the slot.
    Applied,
    /// A newer request (or unmount) superseded this one; release the handle.
    Stale(String),
}

impl IconSlot {
    /// Start a fetch. Returns the ticket for `complete` and the previous
    /// handle, which the caller must release.
    pub fn begin(&mut self) -> (u64, Option<String>) {
        self.generation += 1;
        (self.generation, self.handle.take())
    }

    pub fn complete(&mut self, ticket: u64, handle: String) -> Completion {
        if ticket != self.generation {
            return Completion::Stale(handle);
        }
        debug_assert!(self.handle.is_none());
        self.handle = Some(handle);
        Completion::Applied
    }

    /// Consumer is going away: any fetch still in flight becomes stale.
    pub fn release(&mut self) -> Option<String> {
        self.generation += 1;
        self.handle.take()
    }

    pub fn handle(&self) -> Option<&str> {
        self.handle.as_deref()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_completion_applies() {
        let mut slot = IconSlot::default();
        let (ticket, previous) = slot.begin();
        assert_eq!(previous, None);
        assert_eq!(slot.complete(ticket, "blob:a".into()), Completion::Applied);
        assert_eq!(slot.handle(), Some("blob:a"));
    }

    #[test]
    fn test_url_change_discards_stale_result() {
        let mut slot = IconSlot::default();
        let (first, _) = slot.begin();
        let (second, previous) = slot.begin();
        assert_eq!(previous, None);

        assert_eq!(
            slot.complete(first, "blob:old".into()),
            Completion::Stale("blob:old".into())
        );
        assert_eq!(slot.complete(second, "blob:new".into()), Completion::Applied);
        assert_eq!(slot.handle(), Some("blob:new"));
    }

    #[test]
    fn test_begin_hands_back_previous_handle() {
        let mut slot = IconSlot::default();
        let (ticket, _) = slot.begin();
        slot.complete(ticket, "blob:a".into());

        let (_, previous) = slot.begin();
        assert_eq!(previous.as_deref(), Some("blob:a"));
        assert_eq!(slot.handle(), None);
    }

    #[test]
    fn test_failed_fetch_keeps_placeholder() {
        let mut slot = IconSlot::default();
        let (ticket, _) = slot.begin();
        slot.complete(ticket, "blob:a".into());

        // new URL fails to load: nothing completes, old handle already handed back
        let (_, previous) = slot.begin();
        assert!(previous.is_some());
        assert_eq!(slot.handle(), None);
    }

    #[test]
    fn test_release_on_unmount() {
        let mut slot = IconSlot::default();
        let (ticket, _) = slot.begin();
        slot.complete(ticket, "blob:a".into());
        assert_eq!(slot.release().as_deref(), Some("blob:a"));

        // fetch started before unmount, finished after it
        let mut slot = IconSlot::default();
        let (ticket, _) = slot.begin();
        assert_eq!(slot.release(), None);
        assert_eq!(
            slot.complete(ticket, "blob:late".into()),
            Completion::Stale("blob:late".into())
        );
        assert_eq!(slot.handle(), None);
    }
}
