use heck::ToSnakeCase;

/// An identifier split into lower-case words.
#[derive(Debug, Clone, Eq, PartialEq, Hash)]
pub struct Name {
    pub parts: Vec<String>,
}

impl Name {
    pub fn new(src: &str) -> Self {
        let snake = src.to_snake_case();
        let parts = snake.split('_').map(String::from).collect();
        Self { parts }
    }

    pub fn snake_case(&self) -> String {
        self.parts.join("_")
    }

    /// Snake case with the last word pluralized.
    ///
    /// A trailing `y` becomes `ies`, a trailing `s` is left alone, anything
    /// else gets an `s`. Irregular nouns are not handled.
    pub fn plural(&self) -> String {
        let snake = self.snake_case();

        if let Some(stem) = snake.strip_suffix('y') {
            format!("{stem}ies")
        } else if snake.ends_with('s') {
            snake
        } else {
            format!("{snake}s")
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn snake_case() {
        assert_eq!(Name::new("UserProfile").snake_case(), "user_profile");
        assert_eq!(Name::new("BirthDate").snake_case(), "birth_date");
        assert_eq!(Name::new("ID").snake_case(), "id");
        assert_eq!(Name::new("user_id").snake_case(), "user_id");
    }

    #[test]
    fn plural() {
        assert_eq!(Name::new("Category").plural(), "categories");
        assert_eq!(Name::new("Status").plural(), "status");
        assert_eq!(Name::new("User").plural(), "users");
        assert_eq!(Name::new("UserProfile").plural(), "user_profiles");
        // No irregular nouns
        assert_eq!(Name::new("Person").plural(), "persons");
    }
}
