/// A simple key/value pair for display.
pub struct DetailField {
    pub key: String,
    pub value: String,
}

/// Boxed title + aligned fields, used as the expense details dialog.
pub struct DetailView {
    pub title: String,
    pub fields: Vec<DetailField>,
    pub footer: Option<String>,
}

impl DetailView {
    pub fn new<T: Into<String>>(title: T) -> Self {
        Self {
            title: title.into(),
            fields: Vec::new(),
            footer: None,
        }
    }

    /// Adds a field to the view, returning self for chaining.
    pub fn with_field<K, V>(mut self, key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<String>,
    {
        self.fields.push(DetailField {
            key: key.into(),
            value: value.into(),
        });
        self
    }

    pub fn with_footer(mut self, footer: impl Into<String>) -> Self {
        self.footer = Some(footer.into());
        self
    }

    pub fn render(&self, plain: bool) -> String {
        let key_width = self
            .fields
            .iter()
            .map(|field| field.key.chars().count())
            .max()
            .unwrap_or(0);
        let body: Vec<String> = self
            .fields
            .iter()
            .map(|field| format!("  {:<key_width$}  {}", field.key, field.value))
            .collect();

        let rule_len = body
            .iter()
            .map(|line| line.chars().count())
            .chain(std::iter::once(self.title.chars().count()))
            .max()
            .unwrap_or(0)
            .max(32);
        let rule = if plain { "=" } else { "═" }.repeat(rule_len);

        let mut lines = vec![rule.clone(), format!("  {}", self.title), rule.clone()];
        lines.extend(body);
        if let Some(footer) = &self.footer {
            lines.push(String::new());
            lines.push(format!("  {footer}"));
        }
        lines.push(rule);
        lines.join("\n")
    }
}
