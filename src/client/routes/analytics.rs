use dioxus::document::Title;
use dioxus::prelude::*;

use crate::{
    client::{
        components::{Loading, Page, StatCard},
        state::analytics::{AnalyticsData, Series},
        util::use_api,
    },
    model::{analytics::{Granularity, TimeBucketDto}, user::UserDto},
};

#[component]
pub fn AnalyticsView(user: UserDto) -> Element {
    let api = use_api();

    let data = use_resource(move || {
        let api = api.clone();
        async move { AnalyticsData::load(&api).await }
    });

    rsx!(
        Title { "Analytics | Career Center" }
        Page { title: "Analytics", subtitle: "Platform activity for {user.full_name}",
            match &*data.read() {
                None => rsx!(Loading {}),
                Some(data) => rsx!(
                    if let Some(overview) = data.overview.clone() {
                        div { class: "grid grid-cols-2 md:grid-cols-4 gap-4",
                            StatCard { label: "Students", value: "{overview.total_students}" }
                            StatCard { label: "Companies", value: "{overview.total_companies}" }
                            StatCard { label: "Active vacancies", value: "{overview.active_vacancies}" }
                            StatCard { label: "Active internships", value: "{overview.active_internships}" }
                        }
                    } else {
                        p { class: "opacity-70", "Overview is not available" }
                    }
                    div { class: "grid grid-cols-1 lg:grid-cols-2 gap-4",
                        div { class: "card bg-base-200",
                            div { class: "card-body",
                                h2 { class: "card-title", "Most active companies" }
                                if data.company_activity.is_empty() {
                                    p { class: "opacity-70", "No data" }
                                } else {
                                    table { class: "table table-sm",
                                        thead { tr { th { "Company" } th { "Vacancies" } th { "Responses" } } }
                                        tbody {
                                            for (index, company) in data.company_activity.iter().enumerate() {
                                                tr { key: "{index}",
                                                    td { "{company.company_name}" }
                                                    td { "{company.vacancy_count}" }
                                                    td { "{company.response_count}" }
                                                }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                        div { class: "card bg-base-200",
                            div { class: "card-body",
                                h2 { class: "card-title", "Popular terms" }
                                if data.word_cloud.is_empty() {
                                    p { class: "opacity-70", "No data" }
                                } else {
                                    div { class: "flex flex-wrap gap-2",
                                        for (index, term) in data.word_cloud.iter().enumerate() {
                                            span { key: "{index}", class: "badge badge-outline gap-1",
                                                "{term.text}"
                                                span { class: "opacity-60", "{term.value}" }
                                            }
                                        }
                                    }
                                }
                            }
                        }
                    }
                ),
            }
            div { class: "grid grid-cols-1 lg:grid-cols-2 gap-4",
                for series in Series::ALL {
                    SeriesCard { key: "{series.title()}", series }
                }
            }
        }
    )
}

/// One time series with its own granularity switch
#[component]
fn SeriesCard(series: Series) -> Element {
    let api = use_api();
    let mut granularity = use_signal(Granularity::default);

    let buckets = use_resource(move || {
        let api = api.clone();
        let granularity = granularity();
        async move { series.load(&api, granularity).await }
    });

    rsx!(
        div { class: "card bg-base-200",
            div { class: "card-body",
                div { class: "flex justify-between items-center",
                    h2 { class: "card-title", "{series.title()}" }
                    div { class: "join",
                        for option in Granularity::ALL {
                            button {
                                key: "{option.as_str()}",
                                class: if granularity() == option { "btn btn-sm join-item btn-active" } else { "btn btn-sm join-item" },
                                onclick: move |_| granularity.set(option),
                                "{option.label()}"
                            }
                        }
                    }
                }
                match &*buckets.read() {
                    None => rsx!(Loading {}),
                    Some(buckets) => rsx!(SeriesTable { buckets: buckets.clone() }),
                }
            }
        }
    )
}

#[component]
fn SeriesTable(buckets: Vec<TimeBucketDto>) -> Element {
    rsx!(
        div {
            if buckets.is_empty() {
                p { class: "opacity-70", "No data" }
            } else {
                table { class: "table table-sm",
                    thead { tr { th { "Period" } th { "Count" } } }
                    tbody {
                        for bucket in buckets.iter() {
                            tr { key: "{bucket.period}",
                                td { "{bucket.period}" }
                                td { "{bucket.count}" }
                            }
                        }
                    }
                }
            }
        }
    )
}
