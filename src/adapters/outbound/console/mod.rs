/// Console adapters for report presentation
mod stdout_presenter;

pub use stdout_presenter::StdoutPresenter;
