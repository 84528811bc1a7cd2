//! Universe file loading.
//!
//! The host's extraction tooling decodes assembly metadata and writes a
//! JSON universe file; this module turns that file into a frozen
//! [`TypeUniverse`] plus the host's built-in extensions. Nothing here
//! touches binary metadata - that decoding stays on the extraction side.
//!
//! Shape flags are mutually exclusive per record: a type is an array, a
//! list-like generic, some other generic, or plain.

use crate::error::{IoResultExt, NestcheckError, NestcheckResult};
use crate::universe::{FieldDef, TypeDef, TypeShape, TypeUniverse};
use serde::Deserialize;
use std::fs;
use std::path::Path;

fn default_marker() -> String {
    "System.SerializableAttribute".to_string()
}

/// Top-level universe file model.
#[derive(Debug, Deserialize)]
pub struct UniverseFile {
    /// Fully qualified name of the engine-object root type.
    pub engine_root: String,
    /// Marker attribute identity; the host default applies when omitted.
    #[serde(default = "default_marker")]
    pub marker_attribute: String,
    /// Host-supplied extensions to the built-in serializable set.
    #[serde(default)]
    pub builtins: Vec<String>,
    #[serde(default)]
    pub types: Vec<TypeRecord>,
}

/// One type record as it appears on disk.
#[derive(Debug, Deserialize)]
pub struct TypeRecord {
    pub name: String,
    #[serde(default)]
    pub superclass: Option<String>,
    #[serde(default)]
    pub attributes: Vec<String>,
    /// Element type when the record is an array.
    #[serde(default)]
    pub array_of: Option<String>,
    /// Argument type when the record is a list-like generic.
    #[serde(default)]
    pub list_of: Option<String>,
    /// Any other generic shape.
    #[serde(default)]
    pub generic: bool,
    #[serde(default)]
    pub fields: Vec<FieldRecord>,
}

/// One instance-field record. Static fields never appear in universe files.
#[derive(Debug, Deserialize)]
pub struct FieldRecord {
    pub name: String,
    #[serde(rename = "type")]
    pub type_name: String,
    #[serde(default)]
    pub excluded: bool,
}

/// A decoded universe plus the built-in extensions that travelled with it.
#[derive(Debug)]
pub struct LoadedUniverse {
    pub universe: TypeUniverse,
    pub builtins: Vec<String>,
}

/// Loads and validates a universe file. Strict: any malformed record fails
/// the load with a typed, path-carrying error.
pub fn load_universe(path: &Path) -> NestcheckResult<LoadedUniverse> {
    let content = fs::read_to_string(path).with_path(path)?;
    let file: UniverseFile = serde_json::from_str(&content)
        .map_err(|e| NestcheckError::decode(path, e.to_string()))?;

    let mut universe = TypeUniverse::new(file.engine_root, file.marker_attribute);
    for record in file.types {
        let shape = resolve_shape(path, &record)?;
        let mut ty = TypeDef::new(record.name)
            .with_shape(shape);
        ty.superclass = record.superclass;
        ty.attributes = record.attributes;
        for field in record.fields {
            ty.fields.push(FieldDef {
                name: field.name,
                type_name: field.type_name,
                excluded: field.excluded,
            });
        }
        universe
            .insert(ty)
            .map_err(|e| NestcheckError::decode(path, e.to_string()))?;
    }

    Ok(LoadedUniverse {
        universe,
        builtins: file.builtins,
    })
}

fn resolve_shape(path: &Path, record: &TypeRecord) -> NestcheckResult<TypeShape> {
    match (&record.array_of, &record.list_of, record.generic) {
        (Some(element), None, false) => Ok(TypeShape::Array {
            element: element.clone(),
        }),
        (None, Some(argument), false) => Ok(TypeShape::ListLike {
            argument: argument.clone(),
        }),
        (None, None, true) => Ok(TypeShape::GenericOther),
        (None, None, false) => Ok(TypeShape::Plain),
        _ => Err(NestcheckError::decode(
            path,
            format!("conflicting shape flags on type record: {}", record.name),
        )),
    }
}
