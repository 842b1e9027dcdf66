use std::collections::BTreeMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ElementKind {
    /// Block element holding markup
    Container,
    /// Drawing surface with a 2-D context
    Canvas,
}

/// An element of the page, addressed by its id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Element {
    id: String,
    kind: ElementKind,
    inner_html: String,
    attributes: BTreeMap<String, String>,
}

impl Element {
    pub fn new(id: impl Into<String>, kind: ElementKind) -> Self {
        Self {
            id: id.into(),
            kind,
            inner_html: String::new(),
            attributes: BTreeMap::new(),
        }
    }

    pub fn container(id: impl Into<String>) -> Self {
        Self::new(id, ElementKind::Container)
    }

    pub fn canvas(id: impl Into<String>) -> Self {
        Self::new(id, ElementKind::Canvas)
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn kind(&self) -> ElementKind {
        self.kind
    }

    pub fn inner_html(&self) -> &str {
        &self.inner_html
    }

    pub fn set_inner_html(&mut self, html: impl Into<String>) {
        self.inner_html = html.into();
    }

    pub fn append_html(&mut self, html: &str) {
        self.inner_html.push_str(html);
    }

    pub fn clear(&mut self) {
        self.inner_html.clear();
    }

    pub fn attribute(&self, name: &str) -> Option<&str> {
        self.attributes.get(name).map(String::as_str)
    }

    pub fn set_attribute(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.attributes.insert(name.into(), value.into());
    }

    /// 2-D drawing context; only canvases have one.
    pub fn context_2d(&mut self) -> Option<DrawingContext<'_>> {
        match self.kind {
            ElementKind::Canvas => Some(DrawingContext { canvas: self }),
            ElementKind::Container => None,
        }
    }
}

/// Borrowed drawing context of a canvas. Whatever a charting backend draws
/// stays attached to the canvas after the context is dropped.
#[derive(Debug)]
pub struct DrawingContext<'a> {
    canvas: &'a mut Element,
}

impl DrawingContext<'_> {
    pub fn canvas_id(&self) -> &str {
        &self.canvas.id
    }

    pub fn attach(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.canvas.set_attribute(name, value);
    }
}
