//! In-memory document implementation.

use super::{Document, DocumentError, DocumentResult, ElementKind, EventHandler, ListenerId, UiEvent};
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, HashMap};
use std::fmt;
use uuid::Uuid;

/// Handle to a node in a [`MemoryDocument`].
pub type NodeId = Uuid;

#[derive(Debug, Clone)]
struct Node {
    kind: ElementKind,
    attributes: BTreeMap<String, String>,
    /// Inline styles in the order they were first set.
    styles: Vec<(String, String)>,
    text: String,
    value: String,
    hidden: bool,
}

impl Node {
    fn new(kind: ElementKind) -> Self {
        Self {
            kind,
            attributes: BTreeMap::new(),
            styles: Vec::new(),
            text: String::new(),
            value: String::new(),
            hidden: false,
        }
    }
}

struct Listener {
    id: ListenerId,
    event_type: String,
    handler: EventHandler,
}

/// Serializable view of an attached node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NodeSnapshot {
    pub tag: String,
    pub attributes: BTreeMap<String, String>,
    pub styles: Vec<(String, String)>,
    pub text: String,
    pub value: String,
    pub hidden: bool,
}

/// Document held entirely in memory, for tests and headless runs.
#[derive(Default)]
pub struct MemoryDocument {
    nodes: HashMap<NodeId, Node>,
    /// Attached nodes in append order.
    container: Vec<NodeId>,
    listeners: HashMap<NodeId, Vec<Listener>>,
}

impl fmt::Debug for MemoryDocument {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("MemoryDocument")
            .field("nodes", &self.nodes.len())
            .field("attached", &self.container.len())
            .field("listeners", &self.listeners.values().map(Vec::len).sum::<usize>())
            .finish()
    }
}

impl MemoryDocument {
    /// Create an empty document.
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of attached elements.
    pub fn len(&self) -> usize {
        self.container.len()
    }

    pub fn is_empty(&self) -> bool {
        self.container.is_empty()
    }

    /// Attached elements of `kind`.
    pub fn count_kind(&self, kind: &ElementKind) -> usize {
        self.attached().filter(|(_, node)| &node.kind == kind).count()
    }

    /// Fire an event on the element with `id`, running its matching
    /// handlers in subscription order. Returns how many handlers ran.
    pub fn dispatch(&mut self, id: &str, event_type: &str) -> usize {
        let Some(node) = self.element_by_id(id) else {
            return 0;
        };
        let Some(listeners) = self.listeners.get_mut(&node) else {
            return 0;
        };
        let event = UiEvent {
            event_type: event_type.to_string(),
            target_id: id.to_string(),
        };
        let mut ran = 0;
        for listener in listeners.iter_mut().filter(|l| l.event_type == event_type) {
            (listener.handler)(&event);
            ran += 1;
        }
        ran
    }

    /// Ids of the listeners registered on `id`.
    pub fn listener_ids(&self, id: &str) -> Vec<ListenerId> {
        self.element_by_id(id)
            .and_then(|node| self.listeners.get(&node))
            .map(|listeners| listeners.iter().map(|l| l.id).collect())
            .unwrap_or_default()
    }

    /// Snapshot of every attached element in append order.
    pub fn snapshot(&self) -> Vec<NodeSnapshot> {
        self.attached()
            .map(|(_, node)| NodeSnapshot {
                tag: node.kind.tag_name(),
                attributes: node.attributes.clone(),
                styles: node.styles.clone(),
                text: node.text.clone(),
                value: node.value.clone(),
                hidden: node.hidden,
            })
            .collect()
    }

    fn attached(&self) -> impl Iterator<Item = (NodeId, &Node)> {
        self.container
            .iter()
            .filter_map(|id| self.nodes.get(id).map(|node| (*id, node)))
    }

    fn node_mut(&mut self, id: &NodeId) -> DocumentResult<&mut Node> {
        self.nodes
            .get_mut(id)
            .ok_or_else(|| DocumentError::ElementNotFound(id.to_string()))
    }
}

impl Document for MemoryDocument {
    type Element = NodeId;

    fn create_element(&mut self, kind: &ElementKind) -> DocumentResult<NodeId> {
        let id = Uuid::new_v4();
        self.nodes.insert(id, Node::new(kind.clone()));
        Ok(id)
    }

    fn element_by_id(&self, id: &str) -> Option<NodeId> {
        self.attached()
            .find(|(_, node)| node.attributes.get("id").map(String::as_str) == Some(id))
            .map(|(node_id, _)| node_id)
    }

    fn element_with_attribute(&self, name: &str) -> Option<NodeId> {
        self.attached()
            .find(|(_, node)| node.attributes.contains_key(name))
            .map(|(node_id, _)| node_id)
    }

    fn kind(&self, element: &NodeId) -> ElementKind {
        self.nodes
            .get(element)
            .map(|node| node.kind.clone())
            .unwrap_or_else(|| ElementKind::Other(String::new()))
    }

    fn attribute(&self, element: &NodeId, name: &str) -> Option<String> {
        self.nodes.get(element)?.attributes.get(name).cloned()
    }

    fn set_attribute(&mut self, element: &NodeId, name: &str, value: &str) -> DocumentResult<()> {
        self.node_mut(element)?
            .attributes
            .insert(name.to_string(), value.to_string());
        Ok(())
    }

    fn style(&self, element: &NodeId, property: &str) -> Option<String> {
        self.nodes
            .get(element)?
            .styles
            .iter()
            .find(|(name, _)| name == property)
            .map(|(_, value)| value.clone())
    }

    fn set_style(&mut self, element: &NodeId, property: &str, value: &str) -> DocumentResult<()> {
        let node = self.node_mut(element)?;
        match node.styles.iter_mut().find(|(name, _)| name == property) {
            Some((_, existing)) => *existing = value.to_string(),
            None => node.styles.push((property.to_string(), value.to_string())),
        }
        Ok(())
    }

    fn text(&self, element: &NodeId) -> String {
        self.nodes.get(element).map(|n| n.text.clone()).unwrap_or_default()
    }

    fn set_text(&mut self, element: &NodeId, text: &str) -> DocumentResult<()> {
        self.node_mut(element)?.text = text.to_string();
        Ok(())
    }

    fn value(&self, element: &NodeId) -> String {
        self.nodes.get(element).map(|n| n.value.clone()).unwrap_or_default()
    }

    fn set_value(&mut self, element: &NodeId, value: &str) -> DocumentResult<()> {
        self.node_mut(element)?.value = value.to_string();
        Ok(())
    }

    fn is_hidden(&self, element: &NodeId) -> bool {
        self.nodes.get(element).is_some_and(|n| n.hidden)
    }

    fn set_hidden(&mut self, element: &NodeId, hidden: bool) -> DocumentResult<()> {
        self.node_mut(element)?.hidden = hidden;
        Ok(())
    }

    fn append(&mut self, element: &NodeId) -> DocumentResult<()> {
        if !self.nodes.contains_key(element) {
            return Err(DocumentError::ElementNotFound(element.to_string()));
        }
        // Re-appending moves the node to the end, as in a DOM.
        self.container.retain(|id| id != element);
        self.container.push(*element);
        Ok(())
    }

    fn remove(&mut self, element: &NodeId) -> DocumentResult<()> {
        if self.nodes.remove(element).is_none() {
            return Err(DocumentError::ElementNotFound(element.to_string()));
        }
        self.container.retain(|id| id != element);
        self.listeners.remove(element);
        Ok(())
    }

    fn add_listener(
        &mut self,
        element: &NodeId,
        event_type: &str,
        handler: EventHandler,
    ) -> DocumentResult<ListenerId> {
        if !self.nodes.contains_key(element) {
            return Err(DocumentError::ElementNotFound(element.to_string()));
        }
        let id = Uuid::new_v4();
        self.listeners.entry(*element).or_default().push(Listener {
            id,
            event_type: event_type.to_string(),
            handler,
        });
        Ok(id)
    }
}
