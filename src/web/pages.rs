pub struct Pages {
    registry: handlebars::Handlebars<'static>,
}

impl Pages {
    pub fn new() -> Result<Self, anyhow::Error> {
        // Default escaping stays on: user text must only reach the page
        // through escaped expansions.
        let mut registry = handlebars::Handlebars::new();
        registry.register_template_string("index", include_str!("templates/index.hbs"))?;
        registry.register_template_string("result", include_str!("templates/result.hbs"))?;
        registry.register_template_string("error", include_str!("templates/error.hbs"))?;
        Ok(Self { registry })
    }

    pub fn index(&self) -> String {
        self.render("index", &())
    }

    pub fn analysis_result(&self, text: &str, sentence: &str) -> String {
        #[derive(serde::Serialize)]
        struct ResultPageArgs<'a> {
            text: &'a str,
            sentence: &'a str,
        }

        self.render("result", &ResultPageArgs { text, sentence })
    }

    pub fn invalid_input(&self) -> String {
        self.error_page(
            "Invalid Input Error",
            "Please provide some text to analyze. Empty or blank text cannot be processed.",
            "invalid-input",
            None,
        )
    }

    pub fn analysis_failed(&self, text: &str) -> String {
        self.error_page(
            "Analysis Error",
            "The text could not be processed due to API connectivity issues or invalid \
             content. Please check your input and try again.",
            "analysis-error",
            Some(text),
        )
    }

    fn error_page(&self, title: &str, description: &str, kind: &str, text: Option<&str>) -> String {
        #[derive(serde::Serialize)]
        struct ErrorPageArgs<'a> {
            title: &'a str,
            message: &'a str,
            description: &'a str,
            kind: &'a str,
            text: Option<&'a str>,
        }

        self.render(
            "error",
            &ErrorPageArgs {
                title,
                message: "Invalid text! Please try again!",
                description,
                kind,
                text,
            },
        )
    }

    fn render<T: serde::Serialize>(&self, name: &str, args: &T) -> String {
        match self.registry.render(name, args) {
            Ok(html) => html,
            Err(e) => {
                log::error!("rendering {} failed: {}", name, e);
                String::new()
            }
        }
    }
}
