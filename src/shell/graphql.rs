use async_graphql::{EmptySubscription, MergedObject, Schema};
use async_graphql_axum::{GraphQLRequest, GraphQLResponse};
use axum::{Extension, response::Html};

use crate::modules::time_entries::use_cases::list_time_entries_by_user::inbound::graphql::TimeEntriesQuery;
use crate::modules::time_entries::use_cases::summarize_time_entries::inbound::graphql::SummaryQuery;
use crate::modules::time_entries::use_cases::track_time::inbound::graphql::{
    ClockMutation, ClockQuery,
};
pub use crate::shell::state::AppState;

pub const GRAPHQL_PATH: &str = "/graphql";

#[derive(MergedObject, Default)]
pub struct QueryRoot(ClockQuery, TimeEntriesQuery, SummaryQuery);

#[derive(MergedObject, Default)]
pub struct MutationRoot(ClockMutation);

pub type AppSchema = Schema<QueryRoot, MutationRoot, EmptySubscription>;

pub fn schema(state: AppState) -> AppSchema {
    Schema::build(QueryRoot::default(), MutationRoot::default(), EmptySubscription)
        .data(state)
        .finish()
}

pub async fn graphql(Extension(schema): Extension<AppSchema>, req: GraphQLRequest) -> GraphQLResponse {
    schema.execute(req.into_inner()).await.into()
}

pub async fn graphiql() -> Html<String> {
    use async_graphql::http::GraphiQLSource;
    Html(GraphiQLSource::build().endpoint(GRAPHQL_PATH).finish())
}
