use std::{
    collections::BTreeMap,
    path::{Path, PathBuf},
};

use lopdf::{Dictionary, Document, Object, ObjectId, dictionary};
use tracing::debug;

use crate::library::{BoxError, PdfMerger};

/// Page attributes a page may inherit from its ancestors in the page tree.
const INHERITABLE_PAGE_KEYS: [&[u8]; 4] = [b"Resources", b"MediaBox", b"CropBox", b"Rotate"];
/// Nodes rebuilt for the merged document instead of being copied.
const REBUILT_NODE_TYPES: [&[u8]; 4] = [b"Catalog", b"Pages", b"Outlines", b"Outline"];
const MAX_PAGE_TREE_DEPTH: usize = 64;

/// Merge backend built on `lopdf`.
#[derive(Debug, Clone, Copy, Default)]
pub struct LopdfMerger;

impl PdfMerger for LopdfMerger {
    fn merge(&self, inputs: &[PathBuf], output: &Path) -> Result<(), BoxError> {
        let mut merged = merge_documents(inputs)?;
        merged
            .save(output)
            .map_err(|err| format!("failed to write {}: {err}", output.display()))?;
        debug!(inputs = inputs.len(), output = %output.display(), "merged PDF written");
        Ok(())
    }
}

/// Concatenates the pages of `inputs`, in order, into a new document.
pub fn merge_documents(inputs: &[PathBuf]) -> Result<Document, BoxError> {
    let mut next_id = 1;
    let mut pages: Vec<(ObjectId, Dictionary)> = Vec::new();
    let mut objects: BTreeMap<ObjectId, Object> = BTreeMap::new();

    for input in inputs {
        let mut document = Document::load(input)
            .map_err(|err| format!("failed to load {}: {err}", input.display()))?;
        document.renumber_objects_with(next_id);
        next_id = document.max_id + 1;

        for page_id in document.get_pages().into_values() {
            pages.push((page_id, flatten_page(&document, page_id)?));
        }

        objects.extend(
            std::mem::take(&mut document.objects)
                .into_iter()
                .filter(|(_, object)| !is_rebuilt_node(object)),
        );
    }

    if pages.is_empty() {
        return Err("input documents contain no pages".into());
    }

    let pages_id: ObjectId = (next_id, 0);
    let catalog_id: ObjectId = (next_id + 1, 0);

    let mut merged = Document::with_version("1.5");
    merged.objects = objects;

    let mut kids = Vec::with_capacity(pages.len());
    for (page_id, mut page) in pages {
        page.set("Parent", pages_id);
        merged.objects.insert(page_id, Object::Dictionary(page));
        kids.push(Object::Reference(page_id));
    }

    let count = kids.len() as i64;
    merged.objects.insert(
        pages_id,
        Object::Dictionary(dictionary! {
            "Type" => "Pages",
            "Kids" => kids,
            "Count" => count,
        }),
    );
    merged.objects.insert(
        catalog_id,
        Object::Dictionary(dictionary! {
            "Type" => "Catalog",
            "Pages" => pages_id,
        }),
    );
    merged.trailer.set("Root", catalog_id);
    merged.max_id = catalog_id.0;
    merged.compress();

    Ok(merged)
}

/// Copies a page dictionary, pulling down attributes it inherits from the
/// page tree it is about to leave.
fn flatten_page(document: &Document, page_id: ObjectId) -> Result<Dictionary, BoxError> {
    let mut page = document.get_dictionary(page_id)?.clone();
    let mut parent = parent_of(&page);
    let mut depth = 0;

    while let Some(parent_id) = parent {
        depth += 1;
        if depth > MAX_PAGE_TREE_DEPTH {
            return Err(format!("page tree above object {} {} is cyclic", page_id.0, page_id.1).into());
        }

        let node = document.get_dictionary(parent_id)?;
        for key in INHERITABLE_PAGE_KEYS {
            if !page.has(key) {
                if let Ok(value) = node.get(key) {
                    page.set(key, value.clone());
                }
            }
        }
        parent = parent_of(node);
    }

    Ok(page)
}

fn parent_of(node: &Dictionary) -> Option<ObjectId> {
    node.get(b"Parent").and_then(Object::as_reference).ok()
}

fn is_rebuilt_node(object: &Object) -> bool {
    object
        .as_dict()
        .and_then(|dict| dict.get(b"Type"))
        .and_then(Object::as_name)
        .map(|name| REBUILT_NODE_TYPES.contains(&name))
        .unwrap_or(false)
}
