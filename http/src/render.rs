use judging_session::Visit;

/// Plain-text page for a counted visit.
pub(crate) fn render(visit: &Visit, route: &str) -> String {
    format!(
        "Your Browser is Judging You\n\
         \n\
         Visit count: {visits}\n\
         Session ID: {key}\n\
         \n\
         > {judgment}\n\
         \n\
         Stop judging me: curl -X POST -d reset=1 {route}\n",
        visits = visit.visits(),
        key = visit.key().as_str(),
        judgment = visit.judgment(),
    )
}
