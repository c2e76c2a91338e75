use super::model::DialogDefinition;
use crate::error::DialogConversionError;
use crate::flow::{DialogFlow, Step, StepId};
use ahash::AHashMap;
use itertools::Itertools;

/// A trait for custom data models that can be converted into a canonical
/// [`DialogDefinition`].
///
/// This is the extension point for keeping the engine format-agnostic: a
/// chat framework's own dialog script, a CMS export, or a test fixture
/// implements `IntoDialog` and the rest of the pipeline stays unchanged.
///
/// # Example
///
/// ```rust
/// use annai::definition::{DialogDefinition, IntoDialog, StepDefinition};
/// use annai::error::DialogConversionError;
///
/// /// A flat FAQ script: every entry becomes one step in a linear chain.
/// struct FaqScript {
///     entries: Vec<(String, String)>,
/// }
///
/// impl IntoDialog for FaqScript {
///     fn into_dialog(self) -> Result<DialogDefinition, DialogConversionError> {
///         if self.entries.is_empty() {
///             return Err(DialogConversionError::EmptyDefinition);
///         }
///         let mut steps = vec![StepDefinition {
///             name: "start".to_string(),
///             content: String::new(),
///             data: Default::default(),
///             next: Some(self.entries[0].0.clone()),
///             branches: Vec::new(),
///         }];
///         for (index, (name, text)) in self.entries.iter().enumerate() {
///             steps.push(StepDefinition {
///                 name: name.clone(),
///                 content: text.clone(),
///                 data: Default::default(),
///                 next: self.entries.get(index + 1).map(|(next, _)| next.clone()),
///                 branches: Vec::new(),
///             });
///         }
///         Ok(DialogDefinition {
///             start: "start".to_string(),
///             steps,
///         })
///     }
/// }
/// ```
pub trait IntoDialog {
    /// Consumes the object and converts it into a canonical definition.
    fn into_dialog(self) -> Result<DialogDefinition, DialogConversionError>;
}

impl IntoDialog for DialogDefinition {
    fn into_dialog(self) -> Result<DialogDefinition, DialogConversionError> {
        Ok(self)
    }
}

impl DialogFlow {
    /// Compiles a declarative definition into an arena-backed flow,
    /// resolving step names to ids and deriving the back-references from
    /// the forward links. The result is checked against the tree
    /// invariants before it is returned.
    pub fn from_definition(definition: DialogDefinition) -> Result<Self, DialogConversionError> {
        if definition.steps.is_empty() {
            return Err(DialogConversionError::EmptyDefinition);
        }
        if let Some(name) = definition
            .steps
            .iter()
            .map(|step| step.name.as_str())
            .duplicates()
            .next()
        {
            return Err(DialogConversionError::DuplicateStep(name.to_string()));
        }

        let index: AHashMap<&str, StepId> = definition
            .steps
            .iter()
            .enumerate()
            .map(|(i, step)| (step.name.as_str(), StepId(i)))
            .collect();
        let start = *index
            .get(definition.start.as_str())
            .ok_or_else(|| DialogConversionError::StartNotFound(definition.start.clone()))?;

        let resolve = |source: &str, target: &str| -> Result<StepId, DialogConversionError> {
            index
                .get(target)
                .copied()
                .ok_or_else(|| DialogConversionError::TargetNotFound {
                    source: source.to_string(),
                    target: target.to_string(),
                })
        };

        let mut steps: Vec<Step> = Vec::with_capacity(definition.steps.len());
        for def in &definition.steps {
            let mut step = Step::new(&def.name, None);
            step.content = def.content.clone();
            step.data = def
                .data
                .iter()
                .map(|(key, value)| (key.clone(), value.clone()))
                .collect();
            if let Some(next) = &def.next {
                step.next = Some(resolve(&def.name, next)?);
            }
            for branch in &def.branches {
                step.branches
                    .push((branch.key.clone(), resolve(&def.name, &branch.target)?));
            }
            steps.push(step);
        }

        // Back-references are derived, not declared; a step linked from
        // two parents ends up with a broken back-link and fails validation.
        let links: Vec<(StepId, StepId)> = steps
            .iter()
            .enumerate()
            .flat_map(|(i, step)| {
                step.next
                    .into_iter()
                    .chain(step.branches.iter().map(|&(_, child)| child))
                    .map(move |child| (StepId(i), child))
            })
            .collect();
        for (parent, child) in links {
            steps[child.0].previous = Some(parent);
        }

        let flow = DialogFlow { steps, start };
        flow.validate()?;
        Ok(flow)
    }
}
