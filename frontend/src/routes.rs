use dioxus::prelude::*;

use common::selection::SelectionState;

use crate::components::navbar::Navbar;
use crate::data_definitions::selection_param::SelectionParam;
use crate::data_definitions::wizard_step::WizardStep;
use crate::pages::intro_page::IntroPage;
use crate::pages::preview_page::PreviewPage;
use crate::pages::wizard_page::WizardPage;

#[derive(Debug, Clone, Routable, PartialEq)]
#[rustfmt::skip]
pub enum Route {
    #[layout(Navbar)]


    #[route("/")]
    IntroPage {},


    #[route("/wizard/:step/:selection")]
    WizardPage {
        step: WizardStep,
        selection: SelectionParam,
    },


    #[route("/preview/:selection")]
    PreviewPage { selection: SelectionParam },

}

impl Route {
    /// First wizard step with the default starting selections.
    pub fn wizard_start() -> Self {
        Self::wizard_step(WizardStep::Site, SelectionState::initial())
    }

    pub fn wizard_step(step: WizardStep, selection: SelectionState) -> Self {
        Self::WizardPage {
            step,
            selection: SelectionParam(selection),
        }
    }

    pub fn preview(selection: SelectionState) -> Self {
        Self::PreviewPage {
            selection: SelectionParam(selection),
        }
    }
}
