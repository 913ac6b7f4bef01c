#[derive(Debug, PartialEq, Clone, Copy)]
pub enum ViewState {
    Presenting, // Slides take input
    Help,       // Help overlay is open, next input closes it
}
