use log::debug;

/// How many card rows fit on one printed page.
const MAX_ROWS_PER_PAGE: usize = 4;
const SPACER_HEIGHT: usize = 50;
const PAGE_TOP: &str = "<html><head></head><body>\n<table cellspacing=10>\n";
const PAGE_BOTTOM: &str = "</table>\n</body></html>\n";

/// Tiles card fragments into a printable table, a configurable number of cards
/// per row. After every [MAX_ROWS_PER_PAGE] completed rows, an empty spacer row
/// marks where the printed page breaks.
pub struct HtmlPage {
    columns: usize,
    cards: Vec<String>,
}

impl HtmlPage {
    /// `columns` must be at least 1; the configuration layer guarantees it.
    pub fn new(columns: usize) -> Self {
        Self {
            columns,
            cards: vec![],
        }
    }

    pub fn add_card(&mut self, card: String) {
        self.cards.push(card);
    }

    pub fn render(&self) -> String {
        let mut html = PAGE_TOP.to_owned();
        for (index, row) in self.cards.chunks(self.columns).enumerate() {
            html.push_str("<tr>\n");
            for card in row {
                html.push_str("<td>");
                html.push_str(card);
                html.push_str("</td>\n");
            }
            html.push_str("</tr>\n");
            if (index + 1) % MAX_ROWS_PER_PAGE == 0 {
                html.push_str(&spacer_row(self.columns));
            }
        }
        html.push_str(PAGE_BOTTOM);

        debug!(
            "Tiled {} card(s) into {} row(s) of {} column(s).",
            self.cards.len(),
            self.cards.len().div_ceil(self.columns),
            self.columns
        );
        html
    }
}

fn spacer_row(columns: usize) -> String {
    format!("<tr><td colspan={columns} height={SPACER_HEIGHT}></td></tr>\n")
}
