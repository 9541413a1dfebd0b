//! The inventory front-end as a single event loop.
//!
//! Every user action is an [`AdminEvent`]. [`InventoryApp::dispatch`] applies
//! it to the state, persists the snapshot after each mutation and returns a
//! freshly rendered [`InventoryView`]. Storage writes made by other contexts
//! arrive through [`InventoryApp::pump`]. A failed save keeps the in-memory
//! state, turns the notice into an error and is held for
//! [`InventoryApp::take_save_error`].

use chrono::{DateTime, Utc};
use stockroom_core::{KeyValueStorage, Listing, StorageError, StorageEvent, Theme};
use tracing::{debug, error, info, instrument, warn};

use crate::export::{CsvExport, ExportError, export_csv};
use crate::form::ProductForm;
use crate::line::ProductLine;
use crate::persistence::{SnapshotAdapter, THEME_KEY, load_theme, save_theme};
use crate::projection::{InventoryStats, SortKey, ViewQuery, categories, project};
use crate::render::{DeletePrompt, FormView, InventoryView, Layout, RenderContext, render};
use crate::store::InventoryStore;

type RecordId<L> = <<L as ProductLine>::Record as Listing>::Id;

const SAVE_FAILED: &str = "Error al guardar el inventario";

/// Everything the user can do on the inventory page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AdminEvent<Id> {
    /// Form submitted; adds, or updates the record being edited.
    Submit(ProductForm),
    /// Load a record into the form.
    Edit(Id),
    CancelEdit,
    /// Open the delete confirmation for a record.
    RequestDelete(Id),
    ConfirmDelete,
    CancelDelete,
    Search(String),
    FilterCategory(Option<String>),
    Sort(SortKey),
    ClearFilters,
    SetLayout(Layout),
    ToggleTheme,
    Export,
    /// Another context wrote to shared storage.
    StorageChanged(StorageEvent),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NoticeLevel {
    Success,
    Warning,
    Error,
}

/// Transient message shown to the user after an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub level: NoticeLevel,
    pub message: String,
}

impl Notice {
    fn success(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Success,
            message: message.into(),
        }
    }

    fn warning(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Warning,
            message: message.into(),
        }
    }

    fn error(message: impl Into<String>) -> Self {
        Self {
            level: NoticeLevel::Error,
            message: message.into(),
        }
    }
}

/// Result of one dispatch.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Dispatch {
    pub view: InventoryView,
    pub notice: Option<Notice>,
    /// File offered for download, if the event produced one.
    pub download: Option<CsvExport>,
}

/// Inventory page state for one product line over one storage context.
pub struct InventoryApp<L: ProductLine, S> {
    storage: S,
    adapter: SnapshotAdapter<L::Record>,
    store: InventoryStore<L::Record>,
    query: ViewQuery,
    form: ProductForm,
    editing: Option<RecordId<L>>,
    pending_delete: Option<RecordId<L>>,
    layout: Layout,
    theme: Theme,
    save_error: Option<StorageError>,
}

impl<L, S> std::fmt::Debug for InventoryApp<L, S>
where
    L: ProductLine,
{
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("InventoryApp")
            .field("line", &L::NAME)
            .field("records", &self.store.len())
            .field("query", &self.query)
            .field("editing", &self.editing)
            .field("pending_delete", &self.pending_delete)
            .field("layout", &self.layout)
            .field("theme", &self.theme)
            .field("save_error", &self.save_error)
            .finish_non_exhaustive()
    }
}

impl<L, S> InventoryApp<L, S>
where
    L: ProductLine,
    S: KeyValueStorage,
{
    /// Load the snapshot and theme from `storage`.
    ///
    /// A backend that cannot be read opens as an empty inventory.
    pub fn open(storage: S) -> Self {
        let adapter = SnapshotAdapter::new(L::STORAGE_KEY);
        let records = adapter.load(&storage);
        Self::with_records(storage, adapter, records)
    }

    /// Load the snapshot and theme, failing when the backend cannot be read.
    ///
    /// A malformed snapshot still opens as an empty inventory; only read
    /// errors are reported, so a later save cannot overwrite data that was
    /// never loaded.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend cannot be read.
    pub fn try_open(storage: S) -> Result<Self, StorageError> {
        let adapter = SnapshotAdapter::new(L::STORAGE_KEY);
        let records = adapter.try_load(&storage)?;
        Ok(Self::with_records(storage, adapter, records))
    }

    fn with_records(storage: S, adapter: SnapshotAdapter<L::Record>, records: Vec<L::Record>) -> Self {
        let theme = load_theme(&storage);
        info!(line = L::NAME, count = records.len(), %theme, "Opened inventory");

        Self {
            storage,
            adapter,
            store: InventoryStore::from_records(records),
            query: ViewQuery::default(),
            form: ProductForm::default(),
            editing: None,
            pending_delete: None,
            layout: Layout::default(),
            theme,
            save_error: None,
        }
    }

    /// Write the sample records when no snapshot exists yet.
    ///
    /// Returns whether samples were written.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage backend cannot be read or written.
    pub fn seed_if_absent(&mut self, now: DateTime<Utc>) -> Result<bool, StorageError> {
        if self.adapter.exists(&self.storage)? {
            return Ok(false);
        }
        self.store.replace_all(L::samples(now));
        self.adapter.save(&mut self.storage, self.store.all())?;
        info!(line = L::NAME, count = self.store.len(), "Seeded sample products");
        Ok(true)
    }

    /// Apply an event at the current time.
    pub fn dispatch(&mut self, event: AdminEvent<RecordId<L>>) -> Dispatch {
        self.dispatch_at(event, Utc::now())
    }

    /// Apply an event as if it happened at `now`.
    #[instrument(skip(self, event), fields(line = L::NAME))]
    pub fn dispatch_at(&mut self, event: AdminEvent<RecordId<L>>, now: DateTime<Utc>) -> Dispatch {
        self.save_error = None;
        let mut download = None;
        let notice = match event {
            AdminEvent::Submit(form) => self.submit(&form, now),
            AdminEvent::Edit(id) => {
                if let Some(record) = self.store.get(id) {
                    self.form = ProductForm::from_record(record);
                    self.editing = Some(id);
                } else {
                    debug!(%id, "Edit requested for unknown product");
                }
                None
            }
            AdminEvent::CancelEdit => {
                self.reset_form();
                None
            }
            AdminEvent::RequestDelete(id) => {
                if self.store.contains(id) {
                    self.pending_delete = Some(id);
                }
                None
            }
            AdminEvent::ConfirmDelete => self.confirm_delete(),
            AdminEvent::CancelDelete => {
                self.pending_delete = None;
                None
            }
            AdminEvent::Search(text) => {
                self.query.search = text;
                None
            }
            AdminEvent::FilterCategory(category) => {
                self.query.category = category;
                None
            }
            AdminEvent::Sort(sort) => {
                self.query.sort = sort;
                None
            }
            AdminEvent::ClearFilters => {
                self.query = ViewQuery::default();
                None
            }
            AdminEvent::SetLayout(layout) => {
                self.layout = layout;
                None
            }
            AdminEvent::ToggleTheme => {
                self.theme = self.theme.toggled();
                if let Err(e) = save_theme(&mut self.storage, self.theme) {
                    error!(error = %e, "Failed to save theme");
                    self.save_error = Some(e);
                }
                None
            }
            AdminEvent::Export => match export_csv(self.store.all(), now.date_naive()) {
                Ok(export) => {
                    info!(filename = %export.filename, count = self.store.len(), "Exported inventory");
                    download = Some(export);
                    Some(Notice::success("Inventario exportado exitosamente"))
                }
                Err(ExportError::Empty) => Some(Notice::warning(ExportError::Empty.to_string())),
                Err(e) => {
                    error!(error = %e, "Export failed");
                    Some(Notice::error("Error al exportar el inventario"))
                }
            },
            AdminEvent::StorageChanged(change) => {
                self.apply_external(&change);
                None
            }
        };

        Dispatch {
            view: self.view(),
            notice,
            download,
        }
    }

    /// Apply storage changes made by other contexts since the last call.
    ///
    /// Returns `None` when nothing relevant changed.
    pub fn pump(&mut self) -> Option<InventoryView> {
        let changes: Vec<StorageEvent> = self
            .storage
            .take_changes()
            .into_iter()
            .filter(|c| c.touches(L::STORAGE_KEY) || c.touches(THEME_KEY))
            .collect();
        if changes.is_empty() {
            return None;
        }
        for change in &changes {
            self.apply_external(change);
        }
        Some(self.view())
    }

    /// Render the current state.
    #[must_use]
    pub fn view(&self) -> InventoryView {
        let items = project(self.store.all(), &self.query, L::SEARCH_SCOPE);
        let stats = InventoryStats::compute(&items, L::STOCK_POLICY);
        let categories = categories(self.store.all());

        let form = match self.editing {
            Some(id) => FormView::edit(id.to_string(), self.form.clone()),
            None => FormView::add(self.form.clone()),
        };

        let delete_prompt = self
            .pending_delete
            .and_then(|id| self.store.get(id))
            .map(|record| DeletePrompt {
                id: record.id().to_string(),
                name: record.name().to_owned(),
            });

        render(
            &items,
            &stats,
            RenderContext {
                line: L::NAME,
                policy: L::STOCK_POLICY,
                currency: L::CURRENCY,
                query: &self.query,
                categories: &categories,
                collection_is_empty: self.store.is_empty(),
                layout: self.layout,
                theme: self.theme,
                form,
                delete_prompt,
            },
        )
    }

    /// The save failure of the last dispatch, if any.
    pub const fn take_save_error(&mut self) -> Option<StorageError> {
        self.save_error.take()
    }

    /// True while a record is loaded into the form.
    #[must_use]
    pub const fn has_unsaved_edit(&self) -> bool {
        self.editing.is_some()
    }

    #[must_use]
    pub fn records(&self) -> &[L::Record] {
        self.store.all()
    }

    #[must_use]
    pub const fn query(&self) -> &ViewQuery {
        &self.query
    }

    #[must_use]
    pub const fn theme(&self) -> Theme {
        self.theme
    }

    #[must_use]
    pub const fn storage(&self) -> &S {
        &self.storage
    }

    /// Give the storage back, dropping the in-memory state.
    pub fn into_storage(self) -> S {
        self.storage
    }

    fn submit(&mut self, form: &ProductForm, now: DateTime<Utc>) -> Option<Notice> {
        let draft = match form.parse() {
            Ok(draft) => draft,
            Err(e) => {
                debug!(error = %e, "Ignoring invalid submission");
                return None;
            }
        };

        let notice = match self.editing {
            Some(id) => {
                let Some(current) = self.store.get(id) else {
                    debug!(%id, "Edited product no longer exists");
                    self.reset_form();
                    return None;
                };
                let revised = L::revise(current, draft, now);
                self.store.update(id, revised);
                info!(%id, "Updated product");
                Notice::success("Producto actualizado exitosamente")
            }
            None => {
                let record = L::create(draft, self.store.all(), now);
                info!(id = %record.id(), name = record.name(), "Added product");
                self.store.add(record);
                Notice::success("Producto agregado exitosamente")
            }
        };

        let saved = self.persist();
        self.reset_form();
        Some(if saved { notice } else { Notice::error(SAVE_FAILED) })
    }

    fn confirm_delete(&mut self) -> Option<Notice> {
        let id = self.pending_delete.take()?;
        let removed = self.store.delete(id)?;
        info!(%id, name = removed.name(), "Deleted product");
        if self.editing == Some(id) {
            self.reset_form();
        }
        if !self.persist() {
            return Some(Notice::error(SAVE_FAILED));
        }
        Some(Notice::success("Producto eliminado exitosamente"))
    }

    fn apply_external(&mut self, change: &StorageEvent) {
        if change.touches(L::STORAGE_KEY) {
            let records = change.new_value.as_deref().map_or_else(
                || self.adapter.load(&self.storage),
                |raw| self.adapter.decode(raw),
            );
            info!(count = records.len(), "Reloaded inventory changed elsewhere");
            self.store.replace_all(records);
            self.reset_form();
            if self.pending_delete.is_some_and(|id| !self.store.contains(id)) {
                self.pending_delete = None;
            }
        }
        if change.touches(THEME_KEY) {
            self.theme = load_theme(&self.storage);
        }
    }

    /// Save the snapshot and report whether it was written.
    fn persist(&mut self) -> bool {
        match self.adapter.save(&mut self.storage, self.store.all()) {
            Ok(()) => true,
            Err(e) => {
                error!(error = %e, key = self.adapter.key(), "Failed to save inventory");
                self.save_error = Some(e);
                false
            }
        }
    }

    fn reset_form(&mut self) {
        if self.editing.take().is_some() {
            debug!("Discarded open edit");
        }
        self.form = ProductForm::default();
    }
}

/// Log-only helper for callers that drive the loop without a UI.
pub fn log_notice(notice: &Notice) {
    match notice.level {
        NoticeLevel::Success => info!(message = %notice.message, "Notice"),
        NoticeLevel::Warning => warn!(message = %notice.message, "Notice"),
        NoticeLevel::Error => error!(message = %notice.message, "Notice"),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use chrono::TimeZone;
    use stockroom_core::{MemoryStorage, ProductId};

    use super::*;
    use crate::line::{Classic, Ledger};
    use crate::storage::LocalStorage;

    fn now() -> DateTime<Utc> {
        Utc.timestamp_millis_opt(1_760_000_000_000).unwrap()
    }

    fn form(name: &str, quantity: &str, price: &str) -> ProductForm {
        ProductForm {
            name: name.to_string(),
            category: "Ropa".to_string(),
            quantity: quantity.to_string(),
            price: price.to_string(),
            description: String::new(),
        }
    }

    fn classic() -> InventoryApp<Classic, MemoryStorage> {
        InventoryApp::open(MemoryStorage::new())
    }

    #[test]
    fn test_add_persists_and_notifies() {
        let mut app = classic();
        let out = app.dispatch_at(AdminEvent::Submit(form("Gorra", "3", "15.5")), now());

        assert_eq!(out.notice.unwrap().message, "Producto agregado exitosamente");
        assert_eq!(out.view.cards.len(), 1);
        assert_eq!(out.view.cards[0].id, now().timestamp_millis().to_string());

        let stored = app.storage().get_item("inventory").unwrap().unwrap();
        assert!(stored.contains("\"name\":\"Gorra\""));
    }

    #[test]
    fn test_invalid_submit_is_inert() {
        let mut app = classic();
        let out = app.dispatch_at(AdminEvent::Submit(form("", "3", "1")), now());
        assert!(out.notice.is_none());
        assert!(app.records().is_empty());
        assert!(app.storage().get_item("inventory").unwrap().is_none());
    }

    #[test]
    fn test_edit_then_submit_updates_in_place() {
        let mut app = classic();
        app.dispatch_at(AdminEvent::Submit(form("Gorra", "3", "15")), now());
        app.dispatch_at(AdminEvent::Submit(form("Bufanda", "8", "20")), now());
        let id = app.records()[0].id;

        let out = app.dispatch_at(AdminEvent::Edit(id), now());
        assert!(app.has_unsaved_edit());
        assert_eq!(out.view.form.fields.name, "Gorra");
        assert_eq!(out.view.form.submit_label, "Actualizar");

        let out = app.dispatch_at(AdminEvent::Submit(form("Gorra roja", "4", "15")), now());
        assert_eq!(out.notice.unwrap().message, "Producto actualizado exitosamente");
        assert!(!app.has_unsaved_edit());
        assert_eq!(app.records()[0].id, id);
        assert_eq!(app.records()[0].name, "Gorra roja");
        assert_eq!(app.records()[1].name, "Bufanda");
    }

    #[test]
    fn test_cancel_edit_resets_form() {
        let mut app = classic();
        app.dispatch_at(AdminEvent::Submit(form("Gorra", "3", "15")), now());
        let id = app.records()[0].id;
        app.dispatch_at(AdminEvent::Edit(id), now());
        let out = app.dispatch_at(AdminEvent::CancelEdit, now());
        assert!(!out.view.form.is_editing());
        assert_eq!(out.view.form.fields, ProductForm::default());
    }

    #[test]
    fn test_delete_requires_confirmation() {
        let mut app = classic();
        app.dispatch_at(AdminEvent::Submit(form("Gorra", "3", "15")), now());
        let id = app.records()[0].id;

        let out = app.dispatch_at(AdminEvent::RequestDelete(id), now());
        assert_eq!(out.view.delete_prompt.unwrap().name, "Gorra");
        let out = app.dispatch_at(AdminEvent::CancelDelete, now());
        assert!(out.view.delete_prompt.is_none());
        assert_eq!(app.records().len(), 1);

        app.dispatch_at(AdminEvent::RequestDelete(id), now());
        let out = app.dispatch_at(AdminEvent::ConfirmDelete, now());
        assert_eq!(out.notice.unwrap().message, "Producto eliminado exitosamente");
        assert!(app.records().is_empty());
        assert_eq!(app.storage().get_item("inventory").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_delete_unknown_id_is_noop() {
        let mut app = classic();
        let out = app.dispatch_at(AdminEvent::RequestDelete(ProductId::new(1)), now());
        assert!(out.view.delete_prompt.is_none());
        let out = app.dispatch_at(AdminEvent::ConfirmDelete, now());
        assert!(out.notice.is_none());
    }

    #[test]
    fn test_filters_and_clear() {
        let mut app = classic();
        app.dispatch_at(AdminEvent::Submit(form("Gorra", "3", "15")), now());
        app.dispatch_at(AdminEvent::Submit(form("Bufanda", "8", "20")), now());

        let out = app.dispatch_at(AdminEvent::Search("gor".to_string()), now());
        assert_eq!(out.view.cards.len(), 1);
        let out = app.dispatch_at(AdminEvent::Sort(SortKey::Name), now());
        assert_eq!(out.view.cards[0].name, "Gorra");
        let out = app.dispatch_at(AdminEvent::ClearFilters, now());
        assert_eq!(out.view.cards.len(), 2);
        assert_eq!(app.query(), &ViewQuery::default());
    }

    #[test]
    fn test_export_empty_warns() {
        let mut app = classic();
        let out = app.dispatch_at(AdminEvent::Export, now());
        let notice = out.notice.unwrap();
        assert_eq!(notice.level, NoticeLevel::Warning);
        assert_eq!(notice.message, "No hay productos para exportar");
        assert!(out.download.is_none());
    }

    #[test]
    fn test_export_produces_download() {
        let mut app = classic();
        app.dispatch_at(AdminEvent::Submit(form("Gorra", "3", "15")), now());
        app.dispatch_at(AdminEvent::Search("zzz".to_string()), now());
        let out = app.dispatch_at(AdminEvent::Export, now());
        let export = out.download.unwrap();
        assert!(export.filename.starts_with("inventario_"));
        assert_eq!(export.contents.lines().count(), 2);
    }

    #[test]
    fn test_toggle_theme_persists() {
        let mut app = classic();
        let out = app.dispatch_at(AdminEvent::ToggleTheme, now());
        assert_eq!(out.view.theme, Theme::Dark);
        assert_eq!(app.storage().get_item("theme").unwrap().as_deref(), Some("oscuro"));

        let reopened: InventoryApp<Classic, _> = InventoryApp::open(app.into_storage());
        assert_eq!(reopened.theme(), Theme::Dark);
    }

    #[test]
    fn test_seed_only_when_absent() {
        let mut app = classic();
        assert!(app.seed_if_absent(now()).unwrap());
        assert_eq!(app.records().len(), 3);
        assert!(!app.seed_if_absent(now()).unwrap());

        let mut emptied = classic();
        emptied.storage.set_item("inventory", "[]").unwrap();
        assert!(!emptied.seed_if_absent(now()).unwrap());
        assert!(emptied.records().is_empty());
    }

    #[test]
    fn test_ledger_line_uses_its_own_key() {
        let mut app: InventoryApp<Ledger, _> = InventoryApp::open(MemoryStorage::new());
        app.dispatch_at(AdminEvent::Submit(form("Gorra", "0", "15")), now());
        assert!(app.storage().get_item("inventory").unwrap().is_none());
        let stored = app.storage().get_item("inventory_ledger").unwrap().unwrap();
        assert!(stored.contains("createdAt"));
        assert_eq!(app.view().cards[0].badge_label, "Sin stock");
    }

    #[test]
    fn test_pump_reloads_changes_from_other_context() {
        let shared = LocalStorage::new();
        let mut first: InventoryApp<Classic, _> = InventoryApp::open(shared.open_area());
        let mut second: InventoryApp<Classic, _> = InventoryApp::open(shared.open_area());

        second.dispatch_at(AdminEvent::Submit(form("Gorra", "3", "15")), now());
        let id = second.records()[0].id;
        second.dispatch_at(AdminEvent::Edit(id), now());

        let view = first.pump().unwrap();
        assert_eq!(view.cards.len(), 1);
        first.dispatch_at(AdminEvent::Submit(form("Bufanda", "8", "20")), now());
        assert!(first.pump().is_none());

        let view = second.pump().unwrap();
        assert_eq!(view.cards.len(), 2);
        assert_eq!(view.cards[1].name, "Bufanda");
        assert!(!second.has_unsaved_edit());
    }

    /// Reads from an inner map; every write fails.
    #[derive(Default)]
    struct ReadOnlyStorage(MemoryStorage);

    impl KeyValueStorage for ReadOnlyStorage {
        fn get_item(&self, key: &str) -> Result<Option<String>, StorageError> {
            self.0.get_item(key)
        }

        fn set_item(&mut self, key: &str, _value: &str) -> Result<(), StorageError> {
            Err(read_only(key))
        }

        fn remove_item(&mut self, key: &str) -> Result<(), StorageError> {
            Err(read_only(key))
        }
    }

    fn read_only(key: &str) -> StorageError {
        StorageError::Io {
            operation: "write",
            path: key.into(),
            source: std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only"),
        }
    }

    #[test]
    fn test_failed_save_reports_error_and_keeps_state() {
        let mut app: InventoryApp<Classic, _> = InventoryApp::open(ReadOnlyStorage::default());
        let out = app.dispatch_at(AdminEvent::Submit(form("Gorra", "3", "15")), now());

        let notice = out.notice.unwrap();
        assert_eq!(notice.level, NoticeLevel::Error);
        assert_eq!(notice.message, "Error al guardar el inventario");
        assert_eq!(out.view.cards.len(), 1);
        assert!(matches!(app.take_save_error(), Some(StorageError::Io { operation: "write", .. })));
        assert!(app.take_save_error().is_none());

        app.dispatch_at(AdminEvent::ToggleTheme, now());
        assert!(app.take_save_error().is_some());
        app.dispatch_at(AdminEvent::Search("gorra".to_string()), now());
        assert!(app.take_save_error().is_none());
    }

    #[test]
    fn test_failed_delete_save_reports_error() {
        let mut storage = ReadOnlyStorage::default();
        storage
            .0
            .set_item("inventory", r#"[{"id":1,"name":"Gorra","category":"Ropa","quantity":3,"price":15}]"#)
            .unwrap();
        let mut app: InventoryApp<Classic, _> = InventoryApp::open(storage);

        app.dispatch_at(AdminEvent::RequestDelete(ProductId::new(1)), now());
        let out = app.dispatch_at(AdminEvent::ConfirmDelete, now());
        assert_eq!(out.notice.unwrap().level, NoticeLevel::Error);
        assert!(app.records().is_empty());
        assert!(app.take_save_error().is_some());
    }

    #[test]
    fn test_extreme_values_render_without_overflow() {
        let mut app = classic();
        let out = app.dispatch_at(
            AdminEvent::Submit(form("Lote", "9223372036854775807", "99999999999")),
            now(),
        );
        assert_eq!(out.notice.unwrap().level, NoticeLevel::Success);
        assert_eq!(
            out.view.stats.total_value,
            format!("${}.00", rust_decimal::Decimal::MAX)
        );

        app.dispatch_at(AdminEvent::Submit(form("Lote", "9223372036854775807", "99999999999")), now());
        let out = app.dispatch_at(AdminEvent::Sort(SortKey::Total), now());
        assert_eq!(out.view.cards.len(), 2);
    }

    #[test]
    fn test_precise_price_matches_what_other_contexts_load() {
        let shared = LocalStorage::new();
        let mut first: InventoryApp<Classic, _> = InventoryApp::open(shared.open_area());
        let mut second: InventoryApp<Classic, _> = InventoryApp::open(shared.open_area());

        first.dispatch_at(AdminEvent::Submit(form("Gorra", "3", "1.00000000000000001")), now());
        second.pump().unwrap();
        assert_eq!(second.records(), first.records());
        assert_eq!(
            second.records()[0].price.to_string(),
            "1.00000000000000001"
        );
    }
}
