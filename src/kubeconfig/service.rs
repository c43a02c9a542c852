use super::{CONTEXTS, CURRENT_CONTEXT, ConfigDocument, ConfigStore, KubeconfigResult, NAME};
use serde_yaml::Value;

pub fn current_context(document: &ConfigDocument) -> KubeconfigResult<String> {
    document.str_field(CURRENT_CONTEXT).map(str::to_owned)
}

pub fn list_contexts(document: &ConfigDocument) -> KubeconfigResult<Vec<String>> {
    let entries = document.seq_field(CONTEXTS)?;

    let names: Vec<String> = entries
        .iter()
        .filter_map(|entry| entry.get(NAME).and_then(Value::as_str))
        .map(str::to_owned)
        .collect();

    if names.len() < entries.len() {
        tracing::debug!(
            skipped = entries.len() - names.len(),
            "ignoring context entries without a name"
        );
    }

    Ok(names)
}

pub fn current(store: &ConfigStore) -> KubeconfigResult<String> {
    current_context(&store.load()?)
}

pub fn list(store: &ConfigStore) -> KubeconfigResult<Vec<String>> {
    list_contexts(&store.load()?)
}

pub fn switch(store: &ConfigStore, name: &str) -> KubeconfigResult<()> {
    let mut document = store.load()?;
    document.set_str(CURRENT_CONTEXT, name);
    store.save(&document)?;

    tracing::info!(context = name, path = %store.path().display(), "switched context");
    Ok(())
}
