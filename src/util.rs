use indicatif::{ProgressBar, ProgressStyle};

pub(crate) fn create_settle_spinner(msg: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();

    pb.set_style(
        ProgressStyle::default_spinner()
            .template("[{spinner:.green} {elapsed_precise}] {msg}")
            .expect("Failed to create spinner"),
    );
    pb.set_message(msg.to_owned());

    pb
}
