use crate::{SendingStatus, SubmissionStatus, TaskId};

pub const CARD_TITLE: &str = "Newsletter";
pub const CARD_SUBTITLE: &str = "Receba conteúdos exclusivos!";
pub const CARD_OPEN_LABEL: &str = "Assinar";
pub const DIALOG_TITLE: &str = "Escolha os temas";
pub const DIALOG_PROMPT: &str = "Me descreva quais temas do newsletter você deseja receber:";
pub const ADD_LABEL: &str = "Adicionar";
pub const SUBMIT_LABEL: &str = "Enviar";
pub const CANCEL_LABEL: &str = "Cancelar envio";
pub const DIALOG_SUCCESS: &str = "Newsletter gerada com sucesso!";
pub const TOAST_SENDING: &str = "Enviando newsletter...";
pub const TOAST_COMPLETED: &str = "Newsletter enviada com sucesso!";
pub const TOAST_FAILED: &str = "Falha ao enviar a newsletter.";

/// The single button slot at the bottom of the dialog.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PrimaryAction {
    #[default]
    Submit,
    Cancel,
}

impl PrimaryAction {
    pub fn label(self) -> &'static str {
        match self {
            PrimaryAction::Submit => SUBMIT_LABEL,
            PrimaryAction::Cancel => CANCEL_LABEL,
        }
    }
}

/// Bottom-of-screen status notice, present whenever sending is not idle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Toast {
    pub sending: SendingStatus,
    pub text: &'static str,
    pub busy: bool,
}

impl Toast {
    pub fn for_status(sending: SendingStatus) -> Option<Self> {
        let text = match sending {
            SendingStatus::Idle => return None,
            SendingStatus::Sending => TOAST_SENDING,
            SendingStatus::Completed => TOAST_COMPLETED,
            SendingStatus::Failed => TOAST_FAILED,
        };
        Some(Self {
            sending,
            text,
            busy: sending == SendingStatus::Sending,
        })
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct WidgetViewModel {
    pub dialog_open: bool,
    pub input: String,
    pub topics: Vec<String>,
    pub status: SubmissionStatus,
    pub sending: SendingStatus,
    pub primary_action: PrimaryAction,
    pub show_success: bool,
    pub toast: Option<Toast>,
    pub task_id: Option<TaskId>,
    pub polling: bool,
    pub dirty: bool,
}
