//! Ordered execution of the document passes, from acquisition to written output.

use serde_json::Value;

use crate::corrections::{
    add_image_meta, correct_breadcrumbs, correct_langcodes, correct_timestamps, correct_uris,
    prune_empty_required,
};
use crate::definitions::relocate_data_definitions;
use crate::error::EnhanceError;
use crate::loader::load_spec_auto;
use crate::parameters::{add_query_parameters, normalize_parameters};
use crate::paths::{clean_paths, strip_security};
use crate::serializer::{post_process, serialize};
use crate::types::{json_type_name, EnhanceOptions};

/// Run every tree pass over `doc`, in place.
///
/// Path cleanup runs before the parameter passes so only retained operations
/// are touched, and `data` relocation runs before serialization so the text
/// substitutions never see the freshly built `--data` references.
///
/// # Errors
///
/// Returns `EnhanceError::InvalidSection` if the root is not an object,
/// `EnhanceError::MissingSection` if `paths` or `definitions` is absent, or
/// `EnhanceError::Serialize` if a query parameter cannot be built.
pub fn enhance(doc: &mut Value) -> Result<(), EnhanceError> {
    if !doc.is_object() {
        return Err(EnhanceError::InvalidSection {
            key: "(root)".to_string(),
            actual: json_type_name(doc).to_string(),
        });
    }

    tracing::info!("removing security field");
    strip_security(doc);
    tracing::info!("removing patch, post, delete operations");
    clean_paths(doc)?;
    tracing::info!("updating parameter objects");
    normalize_parameters(doc);
    tracing::info!("deleting empty required fields");
    prune_empty_required(doc);
    tracing::info!("adding include and filter query params");
    add_query_parameters(doc)?;
    tracing::info!("correcting definitions");
    relocate_data_definitions(doc)?;
    tracing::info!("correcting timestamp formats");
    correct_timestamps(doc);
    tracing::info!("correcting langcode types");
    correct_langcodes(doc);
    tracing::info!("correcting uri types");
    correct_uris(doc);
    tracing::info!("correcting breadcrumbs");
    correct_breadcrumbs(doc);
    tracing::info!("adding image meta properties");
    add_image_meta(doc);

    Ok(())
}

/// Enhance a document and render it as post-processed text.
///
/// # Errors
///
/// Returns any error from [`enhance`] or [`serialize`].
pub fn enhance_to_string(mut doc: Value) -> Result<String, EnhanceError> {
    enhance(&mut doc)?;
    let text = serialize(&doc)?;
    Ok(post_process(&text))
}

/// Load, enhance and write a document as configured by `options`.
///
/// # Errors
///
/// Returns `EnhanceError::MissingInput` before any I/O when no input is set,
/// and propagates acquisition, document and write errors.
pub fn process(options: &EnhanceOptions) -> Result<(), EnhanceError> {
    let input = options
        .input
        .as_deref()
        .filter(|input| !input.is_empty())
        .ok_or(EnhanceError::MissingInput)?;

    tracing::info!(source = input, "reading input spec");
    let doc = load_spec_auto(input, options.credentials.as_ref())?;

    let text = enhance_to_string(doc)?;

    tracing::info!(path = %options.output.display(), "writing output spec");
    std::fs::write(&options.output, text).map_err(|source| EnhanceError::WriteError {
        path: options.output.clone(),
        source,
    })?;

    tracing::info!("done");
    Ok(())
}
