use crate::system::kill::SignalKind;
use crate::table::SortMode;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Up,
    Down,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    Quit,
    Navigate(Direction),
    SetSort(SortMode),
    IncreaseInterval,
    DecreaseInterval,
    OpenDetail,
    /// Ask for confirmation before signalling the selected process.
    RequestSignal(SignalKind),
    ConfirmSignal,
    CancelSignal,
    /// Signal the process shown in the detail view right away.
    SignalFromDetail(SignalKind),
    Dismiss,
    None,
}
