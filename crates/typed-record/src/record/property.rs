//! Named instance properties (getter/setter pairs) attached to record types.

use std::fmt;
use std::sync::Arc;

use super::Record;
use crate::error::RecordError;
use crate::value::Value;

pub type Getter = Arc<dyn Fn(&Record) -> Value + Send + Sync>;
pub type Setter = Arc<dyn Fn(&mut Record, Value) -> Result<(), RecordError> + Send + Sync>;

#[derive(Clone)]
pub struct Property {
    get: Getter,
    set: Setter,
}

impl Property {
    pub fn new(
        get: impl Fn(&Record) -> Value + Send + Sync + 'static,
        set: impl Fn(&mut Record, Value) -> Result<(), RecordError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            get: Arc::new(get),
            set: Arc::new(set),
        }
    }

    /// The host's default property for a schema field: reads through
    /// [`Record::get`], writes through [`Record::set_mut`].
    pub fn field(key: impl Into<String>) -> Self {
        let key: Arc<str> = Arc::from(key.into());
        let set_key = Arc::clone(&key);
        Self::new(
            move |record| record.get(&key).cloned().unwrap_or_default(),
            move |record, value| record.set_mut(&set_key, value),
        )
    }

    pub fn get(&self, record: &Record) -> Value {
        (self.get)(record)
    }

    pub fn set(&self, record: &mut Record, value: Value) -> Result<(), RecordError> {
        (self.set)(record, value)
    }
}

impl fmt::Debug for Property {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("Property { .. }")
    }
}
