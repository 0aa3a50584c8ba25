//! [`DocumentSource`] backed by lopdf.

use std::collections::{HashMap, HashSet};
use std::io::Read;
use std::path::Path;

use lopdf::{Dictionary, Document as LopdfDocument, Object, ObjectId};

use super::DocumentSource;
use crate::detect::{parse_header, read_header};
use crate::error::{Error, Result};
use crate::model::RawOutlineItem;

/// Nesting deeper than this is treated as a corrupt outline.
const MAX_OUTLINE_DEPTH: u32 = 64;

/// Name trees deeper than this are not searched.
const MAX_NAME_TREE_DEPTH: u32 = 32;

/// A PDF document loaded with lopdf.
pub struct LopdfSource {
    doc: LopdfDocument,
    /// Page object id → 1-indexed page number.
    page_numbers: HashMap<ObjectId, u32>,
}

impl LopdfSource {
    /// Open a PDF file.
    pub fn open<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        read_header(path)?;
        Self::from_document(LopdfDocument::load(path)?)
    }

    /// Load a PDF from bytes.
    pub fn from_bytes(data: &[u8]) -> Result<Self> {
        parse_header(data)?;
        Self::from_document(LopdfDocument::load_mem(data)?)
    }

    /// Load a PDF from a reader.
    pub fn from_reader<R: Read>(mut reader: R) -> Result<Self> {
        let mut data = Vec::new();
        reader.read_to_end(&mut data)?;
        Self::from_bytes(&data)
    }

    /// Wrap an already-loaded lopdf document.
    pub fn from_document(doc: LopdfDocument) -> Result<Self> {
        if doc.is_encrypted() {
            log::warn!("Document is encrypted; outline and text may be unreadable");
        }

        let page_numbers = doc
            .get_pages()
            .into_iter()
            .map(|(number, id)| (id, number))
            .collect();

        Ok(Self { doc, page_numbers })
    }

    /// Check if the document is encrypted.
    pub fn is_encrypted(&self) -> bool {
        self.doc.is_encrypted()
    }

    /// Get PDF version string.
    pub fn version(&self) -> String {
        self.doc.version.to_string()
    }

    /// Follow a reference to the object it points at.
    fn resolve<'a>(&'a self, obj: &'a Object) -> Result<&'a Object> {
        match obj {
            Object::Reference(id) => Ok(self.doc.get_object(*id)?),
            other => Ok(other),
        }
    }

    fn resolve_dict<'a>(&'a self, obj: &'a Object) -> Option<&'a Dictionary> {
        self.resolve(obj).ok().and_then(|o| o.as_dict().ok())
    }

    /// Walk a sibling chain starting at `first`, descending into children.
    fn walk_outline(
        &self,
        first: ObjectId,
        level: u32,
        visited: &mut HashSet<ObjectId>,
        items: &mut Vec<RawOutlineItem>,
    ) -> Result<()> {
        if level > MAX_OUTLINE_DEPTH {
            return Err(Error::Corrupted(format!(
                "outline nested deeper than {} levels",
                MAX_OUTLINE_DEPTH
            )));
        }

        let mut current = Some(first);
        while let Some(item_id) = current {
            if !visited.insert(item_id) {
                return Err(Error::Corrupted(format!(
                    "outline item {} {} R is linked twice",
                    item_id.0, item_id.1
                )));
            }

            let item = self
                .doc
                .get_object(item_id)
                .and_then(Object::as_dict)
                .map_err(|e| Error::Corrupted(format!("outline item: {}", e)))?;

            items.push(RawOutlineItem {
                level,
                title: item
                    .get(b"Title")
                    .ok()
                    .and_then(|t| self.resolve(t).ok())
                    .and_then(decode_text_string),
                page: self.item_destination(item),
            });

            if let Ok(child) = item.get(b"First").and_then(Object::as_reference) {
                self.walk_outline(child, level + 1, visited, items)?;
            }

            current = item.get(b"Next").and_then(Object::as_reference).ok();
        }

        Ok(())
    }

    /// Resolve an outline item's `/Dest` or GoTo `/A` to a page number.
    fn item_destination(&self, item: &Dictionary) -> Option<u32> {
        if let Ok(dest) = item.get(b"Dest") {
            return self.destination_page(dest);
        }

        let action = item.get(b"A").ok().and_then(|a| self.resolve_dict(a))?;
        match action.get(b"S").and_then(Object::as_name) {
            Ok(b"GoTo") | Err(_) => {}
            Ok(_) => return None,
        }
        self.destination_page(action.get(b"D").ok()?)
    }

    /// Resolve an explicit or named destination.
    fn destination_page(&self, dest: &Object) -> Option<u32> {
        let dest = self.resolve(dest).ok()?;
        match dest {
            Object::String(name, _) | Object::Name(name) => {
                let target = self.named_destination(name)?;
                self.explicit_destination(target)
            }
            other => self.explicit_destination(other),
        }
    }

    /// `[page /XYZ ...]` arrays, or dictionaries wrapping one under `/D`.
    fn explicit_destination(&self, dest: &Object) -> Option<u32> {
        match self.resolve(dest).ok()? {
            Object::Array(arr) => match arr.first()? {
                Object::Reference(page_id) => self.page_numbers.get(page_id).copied(),
                Object::Integer(index) if *index >= 0 => index
                    .checked_add(1)
                    .and_then(|n| u32::try_from(n).ok()),
                _ => None,
            },
            Object::Dictionary(dict) => match self.resolve(dict.get(b"D").ok()?).ok()? {
                Object::Array(_) => self.explicit_destination(dict.get(b"D").ok()?),
                _ => None,
            },
            _ => None,
        }
    }

    /// Look a destination name up in `/Names /Dests`, then in `/Dests`.
    fn named_destination(&self, name: &[u8]) -> Option<&Object> {
        let catalog = self.doc.catalog().ok()?;

        let from_tree = catalog
            .get(b"Names")
            .ok()
            .and_then(|n| self.resolve_dict(n))
            .and_then(|names| names.get(b"Dests").ok())
            .and_then(|d| self.resolve_dict(d))
            .and_then(|root| self.lookup_name_tree(root, name, 0));
        if from_tree.is_some() {
            return from_tree;
        }

        catalog
            .get(b"Dests")
            .ok()
            .and_then(|d| self.resolve_dict(d))
            .and_then(|dests| dests.get(name).ok())
    }

    fn lookup_name_tree<'a>(
        &'a self,
        node: &'a Dictionary,
        name: &[u8],
        depth: u32,
    ) -> Option<&'a Object> {
        if depth > MAX_NAME_TREE_DEPTH {
            return None;
        }

        if let Some(pairs) = node
            .get(b"Names")
            .ok()
            .and_then(|n| self.resolve(n).ok())
            .and_then(|n| n.as_array().ok())
        {
            for pair in pairs.chunks(2) {
                if let [key, value] = pair {
                    if let Ok(Object::String(key, _)) = self.resolve(key) {
                        if key.as_slice() == name {
                            return Some(value);
                        }
                    }
                }
            }
        }

        let kids = node
            .get(b"Kids")
            .ok()
            .and_then(|k| self.resolve(k).ok())
            .and_then(|k| k.as_array().ok())?;
        kids.iter()
            .filter_map(|kid| self.resolve_dict(kid))
            .find_map(|kid| self.lookup_name_tree(kid, name, depth + 1))
    }
}

impl DocumentSource for LopdfSource {
    fn outline(&self) -> Result<Vec<RawOutlineItem>> {
        let catalog = self
            .doc
            .catalog()
            .map_err(|e| Error::Corrupted(format!("document catalog: {}", e)))?;

        let Ok(outlines) = catalog.get(b"Outlines") else {
            return Ok(Vec::new());
        };
        let outlines = self
            .resolve(outlines)?
            .as_dict()
            .map_err(|e| Error::Corrupted(format!("outline root: {}", e)))?;

        let Ok(first) = outlines.get(b"First").and_then(Object::as_reference) else {
            return Ok(Vec::new());
        };

        let mut items = Vec::new();
        self.walk_outline(first, 1, &mut HashSet::new(), &mut items)?;
        Ok(items)
    }

    fn page_count(&self) -> Result<u32> {
        Ok(self.page_numbers.len() as u32)
    }

    fn page_text(&self, index: u32) -> Result<String> {
        let total = self.page_numbers.len() as u32;
        if index >= total {
            return Err(Error::PageOutOfRange(index, total));
        }

        self.doc
            .extract_text(&[index + 1])
            .map_err(|e| Error::TextExtract(format!("Page {}: {}", index + 1, e)))
    }
}

/// Decode a PDF text string (UTF-16BE with BOM, UTF-8, or Latin-1).
fn decode_text_string(obj: &Object) -> Option<String> {
    let Object::String(bytes, _) = obj else {
        return None;
    };

    if let Some(utf16) = bytes.strip_prefix(&[0xFE, 0xFF]) {
        let units: Vec<u16> = utf16
            .chunks_exact(2)
            .map(|c| u16::from_be_bytes([c[0], c[1]]))
            .collect();
        return String::from_utf16(&units).ok();
    }

    match std::str::from_utf8(bytes) {
        Ok(s) => Some(s.to_string()),
        Err(_) => Some(bytes.iter().map(|&b| b as char).collect()),
    }
}
