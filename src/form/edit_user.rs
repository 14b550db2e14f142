use serde_json::{Map, Number, Value};
use strum::IntoEnumIterator;
use strum_macros::{Display, EnumIter, EnumString};
use tracing::{debug, error};

use crate::api::ApiClient;
use crate::auth::AuthSession;
use crate::error::ApiError;
use crate::model::user::UserData;
use crate::nav;

/// The ten operator-editable fields, addressed by their wire names.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Display, EnumIter, EnumString)]
pub enum UserField {
    #[strum(serialize = "name")]
    Name,
    #[strum(serialize = "email")]
    Email,
    #[strum(serialize = "password")]
    Password,
    #[strum(serialize = "role")]
    Role,
    #[strum(serialize = "department")]
    Department,
    #[strum(serialize = "position")]
    Position,
    #[strum(serialize = "baseSalary")]
    BaseSalary,
    #[strum(serialize = "phone")]
    Phone,
    #[strum(serialize = "address")]
    Address,
    #[strum(serialize = "accountNumber")]
    AccountNumber,
}

/// Editable working copy of a user record. Values stay raw JSON so the
/// representation the operator entered is exactly what gets compared and
/// sent.
#[derive(Debug, Clone, PartialEq)]
struct FieldValues {
    name: Value,
    email: Value,
    password: Value,
    role: Value,
    department: Value,
    position: Value,
    base_salary: Value,
    phone: Value,
    address: Value,
    account_number: Value,
}

impl FieldValues {
    /// Seed from a fetched record, substituting a type-appropriate default
    /// for every missing field. The password never round-trips and always
    /// seeds empty.
    fn seeded(user: &UserData) -> Self {
        fn text(value: &Option<String>) -> Value {
            Value::String(value.clone().unwrap_or_default())
        }

        Self {
            name: text(&user.name),
            email: text(&user.email),
            password: Value::String(String::new()),
            role: Value::String(user.role.unwrap_or_default().to_string()),
            department: text(&user.department),
            position: text(&user.position),
            base_salary: Value::Number(user.base_salary.clone().unwrap_or_else(|| Number::from(0))),
            phone: text(&user.phone),
            address: text(&user.address),
            account_number: text(&user.account_number),
        }
    }

    fn get(&self, field: UserField) -> &Value {
        match field {
            UserField::Name => &self.name,
            UserField::Email => &self.email,
            UserField::Password => &self.password,
            UserField::Role => &self.role,
            UserField::Department => &self.department,
            UserField::Position => &self.position,
            UserField::BaseSalary => &self.base_salary,
            UserField::Phone => &self.phone,
            UserField::Address => &self.address,
            UserField::AccountNumber => &self.account_number,
        }
    }

    fn set(&mut self, field: UserField, value: Value) {
        match field {
            UserField::Name => self.name = value,
            UserField::Email => self.email = value,
            UserField::Password => self.password = value,
            UserField::Role => self.role = value,
            UserField::Department => self.department = value,
            UserField::Position => self.position = value,
            UserField::BaseSalary => self.base_salary = value,
            UserField::Phone => self.phone = value,
            UserField::Address => self.address = value,
            UserField::AccountNumber => self.account_number = value,
        }
    }
}

/// Lifecycle of one form instance. The load side effect runs at most once;
/// `Failed` is terminal until the operator opens a fresh form.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormPhase {
    Uninitialized,
    Loading,
    Ready,
    Failed,
}

/// Edit form for one user: loads the record once, tracks operator edits
/// against the fetched baseline, and submits only what changed.
#[derive(Debug)]
pub struct EditUserForm {
    user_id: String,
    phase: FormPhase,
    original: Option<UserData>,
    baseline: Option<FieldValues>,
    fields: Option<FieldValues>,
    submitting: bool,
    error: Option<String>,
}

impl EditUserForm {
    pub fn new(user_id: impl Into<String>) -> Self {
        Self {
            user_id: user_id.into(),
            phase: FormPhase::Uninitialized,
            original: None,
            baseline: None,
            fields: None,
            submitting: false,
            error: None,
        }
    }

    pub fn user_id(&self) -> &str {
        &self.user_id
    }

    pub fn phase(&self) -> FormPhase {
        self.phase
    }

    /// True while a submit is in flight; the shell disables the trigger.
    pub fn is_submitting(&self) -> bool {
        self.submitting
    }

    /// Last surfaced error message, if any.
    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// The baseline record, once loaded.
    pub fn original(&self) -> Option<&UserData> {
        self.original.as_ref()
    }

    /// Current value of one editable field, once the form is seeded.
    pub fn field(&self, field: UserField) -> Option<&Value> {
        self.fields.as_ref().map(|f| f.get(field))
    }

    /// Fetch the record and seed editable state. Runs at most once per form
    /// instance: any later call, including after a failed load, performs no
    /// network fetch.
    pub async fn load(&mut self, api: &ApiClient, session: &AuthSession) -> Result<(), ApiError> {
        if self.phase != FormPhase::Uninitialized {
            return Ok(());
        }
        self.phase = FormPhase::Loading;

        match api.get_user_by_id(&self.user_id, session).await {
            Ok(user) => {
                let seeded = FieldValues::seeded(&user);
                self.baseline = Some(seeded.clone());
                self.fields = Some(seeded);
                self.original = Some(user);
                self.error = None;
                self.phase = FormPhase::Ready;
                Ok(())
            }
            Err(e) => {
                error!(error = %e, user_id = %self.user_id, "Failed to load user");
                self.error = Some(e.message());
                self.phase = FormPhase::Failed;
                Err(e)
            }
        }
    }

    /// Replace one field of the editable copy. No validation happens here;
    /// field constraints are the service's job and surface as submit errors.
    pub fn set_field(&mut self, field: UserField, value: impl Into<Value>) {
        if let Some(fields) = self.fields.as_mut() {
            fields.set(field, value.into());
        }
    }

    /// [`set_field`](Self::set_field) addressed by wire name, for shells that
    /// deal in raw input events. Unknown names are rejected.
    pub fn set_field_by_name(
        &mut self,
        name: &str,
        value: impl Into<Value>,
    ) -> Result<(), ApiError> {
        let field = name
            .parse::<UserField>()
            .map_err(|_| ApiError::state(format!("unknown field: {name}")))?;
        self.set_field(field, value);
        Ok(())
    }

    /// The sparse patch: every field whose current representation differs
    /// from the baseline captured at load time. Comparison is strict JSON
    /// equality with no numeric normalization, so `"5"` and `5` count as
    /// different. The password is carried only when the operator typed one.
    pub fn patch(&self) -> Map<String, Value> {
        let mut patch = Map::new();
        let (Some(fields), Some(baseline)) = (self.fields.as_ref(), self.baseline.as_ref()) else {
            return patch;
        };

        for field in UserField::iter() {
            let current = fields.get(field);
            let changed = if field == UserField::Password {
                current.as_str().is_some_and(|s| !s.is_empty())
            } else {
                current != baseline.get(field)
            };
            if changed {
                patch.insert(field.to_string(), current.clone());
            }
        }
        patch
    }

    /// Send the computed patch. Single-flight: a second submit while one is
    /// in flight is rejected. An unchanged form still issues the request and
    /// the service treats the empty object as a no-op. Returns the route to
    /// navigate to on success; on failure the form state is kept unchanged so
    /// the operator can edit and retry.
    pub async fn submit(
        &mut self,
        api: &ApiClient,
        session: &AuthSession,
    ) -> Result<&'static str, ApiError> {
        if self.phase != FormPhase::Ready {
            return Err(ApiError::state("user record is not loaded"));
        }
        if self.submitting {
            return Err(ApiError::state("an update is already in flight"));
        }

        let patch = self.patch();
        debug!(user_id = %self.user_id, fields = patch.len(), "Submitting user update");

        self.submitting = true;
        let result = api.update_user(&self.user_id, &patch, session).await;
        self.submitting = false;

        match result {
            Ok(_) => {
                self.error = None;
                Ok(nav::routes::ADMIN_DASHBOARD)
            }
            Err(e) => {
                self.error = Some(e.message());
                Err(e)
            }
        }
    }

    /// Cancelling never touches the server; the caller navigates away.
    pub fn cancel(&self) -> &'static str {
        nav::routes::ADMIN_DASHBOARD
    }
}
