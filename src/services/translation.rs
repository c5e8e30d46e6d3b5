//! Translation - The model boundary
//!
//! [`Translator`] is the single operation the rest of the crate needs from
//! the model. [`M2M100Translator`] backs it with the pretrained M2M100 418M
//! checkpoint through rust-bert.

use rust_bert::m2m_100::{
    M2M100ConfigResources, M2M100MergesResources, M2M100ModelResources, M2M100SourceLanguages,
    M2M100TargetLanguages, M2M100VocabResources,
};
use rust_bert::pipelines::common::{ModelResource, ModelType};
use rust_bert::pipelines::translation::{
    Language as ModelLanguage, TranslationConfig, TranslationModel,
};
use rust_bert::resources::RemoteResource;
use snafu::{OptionExt, ResultExt};
use tch::Device;

use crate::domain::{ComputeDevice, Language};
use crate::error::{EmptyOutputSnafu, InferenceSnafu, ModelLoadSnafu, Result};

/// One translation job, with the direction captured when it was created
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TranslationRequest {
    pub id: u64,
    pub text: String,
    pub source: Language,
    pub target: Language,
}

/// Something that can translate a single string
pub trait Translator {
    fn translate(&self, text: &str, source: Language, target: Language) -> Result<String>;
}

/// Translator backed by the M2M100 418M model
pub struct M2M100Translator {
    model: TranslationModel,
}

impl M2M100Translator {
    /// Fetch (or reuse the cached) model weights and build the pipeline
    pub fn load(device: ComputeDevice) -> Result<Self> {
        let model_resource = ModelResource::Torch(Box::new(RemoteResource::from_pretrained(
            M2M100ModelResources::M2M100_418M,
        )));
        let config_resource = RemoteResource::from_pretrained(M2M100ConfigResources::M2M100_418M);
        let vocab_resource = RemoteResource::from_pretrained(M2M100VocabResources::M2M100_418M);
        let merges_resource = RemoteResource::from_pretrained(M2M100MergesResources::M2M100_418M);

        let translation_config = TranslationConfig::new(
            ModelType::M2M100,
            model_resource,
            config_resource,
            vocab_resource,
            Some(merges_resource),
            M2M100SourceLanguages::M2M100_418M,
            M2M100TargetLanguages::M2M100_418M,
            torch_device(device),
        );

        let model = TranslationModel::new(translation_config).context(ModelLoadSnafu)?;
        Ok(Self { model })
    }
}

impl Translator for M2M100Translator {
    fn translate(&self, text: &str, source: Language, target: Language) -> Result<String> {
        let output = self
            .model
            .translate(&[text], model_language(source), model_language(target))
            .context(InferenceSnafu)?;
        output.into_iter().next().context(EmptyOutputSnafu)
    }
}

fn model_language(language: Language) -> ModelLanguage {
    match language {
        Language::Sinhala => ModelLanguage::Sinhala,
        Language::English => ModelLanguage::English,
    }
}

fn torch_device(device: ComputeDevice) -> Device {
    match device {
        ComputeDevice::Auto => Device::cuda_if_available(),
        ComputeDevice::Cpu => Device::Cpu,
        ComputeDevice::Cuda => Device::Cuda(0),
    }
}

/// Translator that answers from a script and records every call
#[cfg(test)]
pub(crate) mod scripted {
    use std::sync::{Arc, Mutex};

    use rust_bert::RustBertError;

    use super::Translator;
    use crate::domain::Language;
    use crate::error::{Error, Result};

    pub(crate) type CallLog = Arc<Mutex<Vec<(String, Language, Language)>>>;

    pub(crate) struct ScriptedTranslator {
        reply: std::result::Result<String, String>,
        calls: CallLog,
    }

    impl ScriptedTranslator {
        pub(crate) fn replying(reply: &str) -> Self {
            Self {
                reply: Ok(reply.to_string()),
                calls: CallLog::default(),
            }
        }

        pub(crate) fn failing(message: &str) -> Self {
            Self {
                reply: Err(message.to_string()),
                calls: CallLog::default(),
            }
        }

        pub(crate) fn calls(&self) -> CallLog {
            self.calls.clone()
        }
    }

    impl Translator for ScriptedTranslator {
        fn translate(&self, text: &str, source: Language, target: Language) -> Result<String> {
            if let Ok(mut calls) = self.calls.lock() {
                calls.push((text.to_string(), source, target));
            }
            self.reply.clone().map_err(|message| Error::Inference {
                source: RustBertError::ValueError(message),
            })
        }
    }
}
