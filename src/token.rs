use std::fmt;

/// Binary operator recognised by the classifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Operator {
    Add,
    Sub,
}

impl Operator {
    /// Keywords are case-sensitive: `Add` is a variable name, not an operator.
    pub fn from_keyword(word: &str) -> Option<Self> {
        match word {
            "add" => Some(Operator::Add),
            "sub" => Some(Operator::Sub),
            _ => None,
        }
    }

    pub fn keyword(self) -> &'static str {
        match self {
            Operator::Add => "add",
            Operator::Sub => "sub",
        }
    }
}

impl fmt::Display for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}
