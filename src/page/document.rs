use std::fmt;
use std::mem;

use tracing::debug;

use super::element::Element;

/// Structural-loading status of a page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ReadyState {
    Loading,
    Ready,
}

/// Looks up render targets by id. Absence is not an error: the feature is
/// simply not on this page.
pub trait TargetProvider {
    fn lookup(&mut self, id: &str) -> Option<&mut Element>;
}

/// Elements of a page in document order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ElementTree {
    elements: Vec<Element>,
}

impl ElementTree {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds `element`, replacing any element with the same id.
    pub fn insert(&mut self, element: Element) {
        match self.elements.iter().position(|e| e.id() == element.id()) {
            Some(index) => self.elements[index] = element,
            None => self.elements.push(element),
        }
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }

    pub fn len(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }
}

impl TargetProvider for ElementTree {
    fn lookup(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.iter_mut().find(|e| e.id() == id)
    }
}

type ContentLoadedListener<'cb> = Box<dyn FnOnce(&mut ElementTree) + 'cb>;

/// In-memory page: an element tree plus its loading lifecycle.
///
/// A document starts either `Loading` (still being assembled) or `Ready`.
/// `finish_parsing` is the one-shot "structure parsed" notification: it moves
/// a loading document to `Ready` and runs the registered listeners once.
pub struct Document<'cb> {
    ready_state: ReadyState,
    elements: ElementTree,
    listeners: Vec<ContentLoadedListener<'cb>>,
}

impl<'cb> Document<'cb> {
    pub fn loading() -> Self {
        Self {
            ready_state: ReadyState::Loading,
            elements: ElementTree::new(),
            listeners: Vec::new(),
        }
    }

    pub fn ready(elements: ElementTree) -> Self {
        Self {
            ready_state: ReadyState::Ready,
            elements,
            listeners: Vec::new(),
        }
    }

    pub fn with_element(mut self, element: Element) -> Self {
        self.append(element);
        self
    }

    pub fn append(&mut self, element: Element) {
        self.elements.insert(element);
    }

    pub fn ready_state(&self) -> ReadyState {
        self.ready_state
    }

    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.get(id)
    }

    /// Registers `listener` for the structure-parsed notification. A document
    /// that is already ready has sent it, so the listener is dropped unrun.
    pub fn add_content_loaded_listener(&mut self, listener: impl FnOnce(&mut ElementTree) + 'cb) {
        match self.ready_state {
            ReadyState::Loading => self.listeners.push(Box::new(listener)),
            ReadyState::Ready => debug!("content already loaded, listener dropped"),
        }
    }

    /// Returns the number of listeners that ran.
    pub fn finish_parsing(&mut self) -> usize {
        if self.ready_state == ReadyState::Ready {
            return 0;
        }
        self.ready_state = ReadyState::Ready;

        let listeners = mem::take(&mut self.listeners);
        let fired = listeners.len();
        for listener in listeners {
            listener(&mut self.elements);
        }
        fired
    }
}

impl TargetProvider for Document<'_> {
    fn lookup(&mut self, id: &str) -> Option<&mut Element> {
        self.elements.lookup(id)
    }
}

impl fmt::Debug for Document<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Document")
            .field("ready_state", &self.ready_state)
            .field("elements", &self.elements)
            .field("listeners", &self.listeners.len())
            .finish()
    }
}
