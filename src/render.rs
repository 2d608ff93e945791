//! # Tree Layout Engine
//!
//! This module lays a depth-annotated entry sequence out as a paginated
//! tree diagram. It is a pure state machine: callers feed entries in
//! enumeration order and receive per-page lists of drawing operations in
//! PDF point coordinates (origin at the bottom-left corner of a page).
//! Nothing here touches a document backend, which keeps the whole layout
//! testable without parsing PDF output.

/// Title line printed at the top of the first page.
pub const PAGE_TITLE: &str = "Отчет о структуре файлов и папок каталога";

/// Stroke width for all connector lines, in points.
pub const LINE_WIDTH: f32 = 1.0;

const HEADER_FONT_SIZE: f32 = 14.0;
const BODY_FONT_SIZE: f32 = 10.0;
/// Top-left anchor of the header block on the first page.
const HEADER_POSITION: (f32, f32) = (30.0, 820.0);
/// Left edge of the tree body.
const LEFT_X: f32 = 30.0;
/// First row position on every page after the first.
const TOP_Y: f32 = 810.0;
/// Rows never go below this line; crossing it starts a new page.
const BOTTOM_Y: f32 = 20.0;
/// Vertical advance per row, and the indent step per depth level.
const ROW_HEIGHT: f32 = BODY_FONT_SIZE;

/// One primitive drawing operation on a page.
#[derive(Debug, Clone, PartialEq)]
pub enum DrawOp {
    /// A straight stroke from `(x1, y1)` to `(x2, y2)`.
    Line { x1: f32, y1: f32, x2: f32, y2: f32 },
    /// A text run with its baseline starting at `(x, y)`.
    Text { x: f32, y: f32, size: f32, text: String },
}

/// All operations belonging to one page, in emission order.
pub type Page = Vec<DrawOp>;

/// Where the most recent node of some depth was placed.
#[derive(Debug, Clone, Copy)]
struct NodePosition {
    page: usize,
    x: f32,
    y: f32,
}

/// Incremental tree pager.
///
/// `begin` draws the report header and the root label, then every
/// `consume` call places one node: its corner marker, its label and the
/// connector lines joining it to the previous node of the same depth.
/// A connector whose start lies on an earlier page is split into one
/// segment per page so every page remains independently drawable.
pub struct TreePager {
    pages: Vec<Page>,
    /// Depth of the most recently consumed node.
    depth: usize,
    page: usize,
    x: f32,
    /// Row position for the node the next `consume` call will place.
    y: f32,
    /// Last node position per depth, indexed by depth.
    last_at_depth: Vec<NodePosition>,
    /// True until a node lands on the current page. The first node of a
    /// page gets no connector up to its previous sibling.
    first_on_page: bool,
}

impl TreePager {
    /// Starts a layout titled with `root_label`, the directory the tree
    /// describes.
    pub fn begin(root_label: &str) -> Self {
        let mut first_page: Page = Vec::new();
        first_page.push(DrawOp::Text {
            x: HEADER_POSITION.0,
            y: HEADER_POSITION.1,
            size: HEADER_FONT_SIZE,
            text: PAGE_TITLE.to_string(),
        });
        first_page.push(DrawOp::Text {
            x: HEADER_POSITION.0,
            y: HEADER_POSITION.1 - HEADER_FONT_SIZE * 1.1,
            size: HEADER_FONT_SIZE,
            text: root_label.to_string(),
        });

        // The root node sits below the header and anchors depth zero.
        let root_y = HEADER_POSITION.1 - HEADER_FONT_SIZE * 3.0;
        first_page.push(DrawOp::Text {
            x: HEADER_POSITION.0,
            y: root_y,
            size: BODY_FONT_SIZE,
            text: root_label.to_string(),
        });

        let x = HEADER_POSITION.0 + ROW_HEIGHT / 2.0;
        let y = root_y - ROW_HEIGHT;
        Self {
            pages: vec![first_page],
            depth: 0,
            page: 0,
            x,
            y,
            last_at_depth: vec![NodePosition { page: 0, x, y }],
            first_on_page: true,
        }
    }

    /// Places the node for one entry. `depth` counts path components below
    /// the root, so direct children of the root are at depth zero.
    ///
    /// Entries must arrive in enumeration order: every node's parent
    /// precedes it, and depth never grows by more than one step at a time.
    pub fn consume(&mut self, depth: usize, label: &str) {
        if depth == self.depth {
            if !self.first_on_page {
                self.line(self.page, self.x, self.y + ROW_HEIGHT, self.x, self.y);
            }
            self.last_at_depth[depth] = NodePosition {
                page: self.page,
                x: self.x,
                y: self.y,
            };
        } else if depth > self.depth {
            self.x += ROW_HEIGHT;
            self.last_at_depth.push(NodePosition {
                page: self.page,
                x: self.x,
                y: self.y,
            });
        } else {
            self.last_at_depth.truncate(depth + 1);
            self.x = LEFT_X + ROW_HEIGHT * (0.5 + depth as f32);
            let NodePosition {
                page: last_page,
                x: last_x,
                y: last_y,
            } = self.last_at_depth[depth];

            if self.page > last_page {
                // The sibling we connect to sits on an earlier page, so the
                // connector becomes one segment per page.
                self.line(self.page, self.x, TOP_Y + ROW_HEIGHT / 2.0, self.x, self.y);
                for page in (last_page + 1)..self.page {
                    self.line(page, last_x, TOP_Y + ROW_HEIGHT / 2.0, last_x, BOTTOM_Y);
                }
                self.line(last_page, last_x, last_y, last_x, BOTTOM_Y);
            } else if self.page == last_page {
                self.line(self.page, self.x, last_y, self.x, self.y);
            }

            self.last_at_depth[depth] = NodePosition {
                page: self.page,
                x: self.x,
                y: self.y,
            };
        }

        // The node itself: corner marker plus label text.
        self.line(self.page, self.x, self.y, self.x + ROW_HEIGHT / 2.0, self.y);
        self.line(self.page, self.x, self.y + ROW_HEIGHT / 2.0, self.x, self.y);
        self.pages[self.page].push(DrawOp::Text {
            x: self.x + 10.0,
            y: self.y - 3.0,
            size: BODY_FONT_SIZE,
            text: label.to_string(),
        });

        self.y -= ROW_HEIGHT;
        self.first_on_page = false;
        if self.y < BOTTOM_Y {
            self.page += 1;
            self.pages.push(Vec::new());
            self.y = TOP_Y;
            self.first_on_page = true;
        }
        self.depth = depth;
    }

    /// Ends the layout and hands the accumulated pages over.
    pub fn finish(self) -> Vec<Page> {
        self.pages
    }

    fn line(&mut self, page: usize, x1: f32, y1: f32, x2: f32, y2: f32) {
        self.pages[page].push(DrawOp::Line { x1, y1, x2, y2 });
    }
}
