//! HTML rendering of the standings table and the per-round results list.
//! Column headers follow the source site's Spanish abbreviations.

use crate::domain::model::{RoundGroup, TeamRecord};
use chrono::Utc;

/// Render the full report page: standings on top, results by round below.
pub fn render_report(standings: &[TeamRecord], rounds: &[RoundGroup]) -> String {
    let generated = Utc::now().to_rfc3339();
    format!(
        "<!doctype html>\n<html>\n<head><meta charset=\"utf-8\"><title>Tabla general</title></head>\n\
         <body>\n<h1>Tabla general</h1>\n{}\n<h1>Resultados</h1>\n{}\n\
         <p class=\"muted\">Generado: {}</p>\n</body>\n</html>\n",
        render_standings(standings),
        render_results(rounds),
        generated,
    )
}

pub fn render_standings(rows: &[TeamRecord]) -> String {
    let mut out = String::from(
        "<table>\n<thead><tr>\
         <th>#</th><th>Equipo</th><th>Pts</th><th>PJ</th><th>PG</th>\
         <th>PE</th><th>PP</th><th>GF</th><th>GC</th><th>DG</th>\
         </tr></thead>\n<tbody>\n",
    );
    for (i, r) in rows.iter().enumerate() {
        out.push_str(&format!(
            "<tr><td>{:02}</td><td>{}</td><td><b>{}</b></td><td>{}</td><td>{}</td>\
             <td>{}</td><td>{}</td><td>{}</td><td>{}</td><td>{}</td></tr>\n",
            i + 1,
            escape(&r.team),
            r.points,
            r.played,
            r.won,
            r.drawn,
            r.lost,
            r.goals_for,
            r.goals_against,
            r.goal_difference,
        ));
    }
    out.push_str("</tbody>\n</table>");
    out
}

pub fn render_results(rounds: &[RoundGroup]) -> String {
    let mut out = String::new();
    for group in rounds {
        out.push_str(&format!("<div><b>Jornada {}</b><div>\n", group.round));
        for m in &group.matches {
            out.push_str(&format!(
                "&bull; {} {}-{} {}<br/>\n",
                escape(&m.home_team),
                m.home_goals,
                m.away_goals,
                escape(&m.away_team),
            ));
        }
        out.push_str("</div></div>\n");
    }
    out
}

fn escape(s: &str) -> String {
    s.replace('&', "&amp;").replace('<', "&lt;").replace('>', "&gt;")
}
