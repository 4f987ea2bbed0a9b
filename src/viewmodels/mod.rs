pub mod event_list_viewmodel;

pub use event_list_viewmodel::EventListViewModel;
