//! Question sequences that turn operator answers into typed requests.

use crate::{
    application::{
        ports::{PromptSpec, Prompter},
        services::requests::{
            ArtifactRequest, EventRequest, MigrationRequest, ModelRequest, ModuleRequest,
        },
    },
    domain::{ArtifactKind, ModelExtra, ModuleOptions, SubDirectory},
    error::ModcraftResult,
};

/// Asks the questions for one command through a [`Prompter`].
pub struct Interview<'a> {
    prompter: &'a dyn Prompter,
}

impl<'a> Interview<'a> {
    pub fn new(prompter: &'a dyn Prompter) -> Self {
        Self { prompter }
    }

    /// Module name plus the optional directories. Registry wiring is left off;
    /// the caller decides it from the environment mode.
    pub fn module(&self) -> ModcraftResult<ModuleRequest> {
        let name = self.module_name()?;
        let options = ModuleOptions {
            process_manager: self.yes_no("Do you want to include a process manager directory?")?,
            events: self.yes_no("Do you want to include an events directory?")?,
            listeners: self.yes_no("Do you want to include an event listeners directory?")?,
            middleware: self.yes_no("Do you want to include a middleware directory?")?,
        };
        Ok(ModuleRequest {
            name,
            options,
            wire_registries: false,
        })
    }

    /// Module, optional sub-directory (for kinds that take one), then name.
    pub fn artifact(&self, kind: ArtifactKind) -> ModcraftResult<ArtifactRequest> {
        let module = self.module_name()?;
        let sub_directory = if kind.accepts_sub_directory() {
            self.sub_directory()?
        } else {
            None
        };
        let name = self.prompter.ask(&PromptSpec::required(format!(
            "What is the name of the {}?",
            noun(kind)
        )))?;

        Ok(ArtifactRequest::new(module, name).in_sub_directory(sub_directory))
    }

    pub fn model(&self) -> ModcraftResult<ModelRequest> {
        let artifact = self.artifact(ArtifactKind::Model)?;

        let labels: Vec<String> = ModelExtra::ALL.iter().map(|e| e.label().to_string()).collect();
        let defaults = [0usize];
        let picked = self.prompter.select_many(
            &PromptSpec::optional("Select what should be included with the model")
                .with_hint("All options can be added later"),
            &labels,
            &defaults,
        )?;
        let extras = picked
            .into_iter()
            .filter_map(|i| ModelExtra::ALL.get(i).copied())
            .collect();

        Ok(ModelRequest { artifact, extras })
    }

    pub fn event(&self) -> ModcraftResult<EventRequest> {
        let artifact = self.artifact(ArtifactKind::Event)?;
        let listener = if self.yes_no("Do you want to create a listener for this event?")? {
            Some(
                self.prompter
                    .ask(&PromptSpec::required("What is the name of the listener?"))?,
            )
        } else {
            None
        };
        Ok(EventRequest { artifact, listener })
    }

    pub fn migration(&self) -> ModcraftResult<MigrationRequest> {
        let module = self.module_name()?;
        let table = self.prompter.ask(
            &PromptSpec::required("What is the name of the table?")
                .with_hint("Table name should be plural"),
        )?;
        Ok(MigrationRequest { module, table })
    }

    fn module_name(&self) -> ModcraftResult<String> {
        self.prompter
            .ask(&PromptSpec::required("What is the name of the module?"))
    }

    fn sub_directory(&self) -> ModcraftResult<Option<SubDirectory>> {
        let raw = self.prompter.ask(
            &PromptSpec::optional("What is the name of the sub-directory?")
                .with_hint("Leave empty if no sub-directory"),
        )?;
        Ok(SubDirectory::parse(&raw)?)
    }

    fn yes_no(&self, label: &str) -> ModcraftResult<bool> {
        let spec = PromptSpec::required(label).with_hint("y/n");
        let answer = self.prompter.confirm(&spec)?;
        Ok(answer.into_bool(label, "unrecognized answer")?)
    }
}

fn noun(kind: ArtifactKind) -> &'static str {
    match kind {
        ArtifactKind::HttpRequest => "request",
        ArtifactKind::HttpResource => "resource",
        ArtifactKind::DomainCollection => "collection",
        other => other.as_str(),
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;
    use std::collections::VecDeque;

    use super::*;
    use crate::domain::YesNo;
    use crate::error::ModcraftError;

    /// Plays back canned answers in order.
    struct Canned {
        answers: RefCell<VecDeque<&'static str>>,
    }

    impl Canned {
        fn new(answers: &[&'static str]) -> Self {
            Self {
                answers: RefCell::new(answers.iter().copied().collect()),
            }
        }

        fn next(&self) -> String {
            self.answers
                .borrow_mut()
                .pop_front()
                .expect("ran out of answers")
                .to_string()
        }
    }

    impl Prompter for Canned {
        fn ask(&self, _: &PromptSpec) -> ModcraftResult<String> {
            Ok(self.next())
        }

        fn confirm(&self, _: &PromptSpec) -> ModcraftResult<YesNo> {
            Ok(YesNo::parse(&self.next()))
        }

        fn select_many(
            &self,
            _: &PromptSpec,
            _: &[String],
            _: &[usize],
        ) -> ModcraftResult<Vec<usize>> {
            Ok(self
                .next()
                .split(',')
                .filter_map(|s| s.trim().parse().ok())
                .collect())
        }
    }

    #[test]
    fn controller_interview() {
        let p = Canned::new(&["Billing", "", "Invoice"]);
        let req = Interview::new(&p).artifact(ArtifactKind::Controller).unwrap();
        assert_eq!(req.module, "Billing");
        assert_eq!(req.sub_directory, None);
        assert_eq!(req.name, "Invoice");
    }

    #[test]
    fn job_interview_skips_sub_directory() {
        let p = Canned::new(&["Billing", "SyncInvoices"]);
        let req = Interview::new(&p).artifact(ArtifactKind::Job).unwrap();
        assert_eq!(req.name, "SyncInvoices");
    }

    #[test]
    fn event_with_listener() {
        let p = Canned::new(&["Shop", "checkout", "OrderPlaced", "y", "SendReceipt"]);
        let req = Interview::new(&p).event().unwrap();
        assert_eq!(req.listener.as_deref(), Some("SendReceipt"));
        assert_eq!(req.artifact.sub_directory.unwrap().to_string(), "Checkout");
    }

    #[test]
    fn model_extras_map_to_indices() {
        let p = Canned::new(&["Shop", "", "Product", "0,3"]);
        let req = Interview::new(&p).model().unwrap();
        assert_eq!(req.extras, vec![ModelExtra::Migration, ModelExtra::Controller]);
    }

    #[test]
    fn invalid_yes_no_is_a_validation_error() {
        let p = Canned::new(&["Shop", "maybe"]);
        let err = Interview::new(&p).module().unwrap_err();
        assert!(matches!(err, ModcraftError::Domain(_)));
    }

    #[test]
    fn module_options() {
        let p = Canned::new(&["Shop", "yes", "no", "n", "y"]);
        let req = Interview::new(&p).module().unwrap();
        assert!(req.options.process_manager);
        assert!(!req.options.events);
        assert!(!req.options.listeners);
        assert!(req.options.middleware);
        assert!(!req.wire_registries);
    }
}
