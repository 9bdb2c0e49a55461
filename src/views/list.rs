use crate::data::models::RestaurantRecord;
use crate::router::View;
use crate::utils::escape_html;
use crate::views::layout;

fn card(index: usize, r: &RestaurantRecord) -> String {
    format!(
        r#"<div class="card">
<h2>{name} <span style="font-weight: normal">({place})</span></h2>
<p><strong>📅 Date :</strong> {date}</p>
<p><strong>🍽️ Plats :</strong> {dishes}</p>
<p><strong>👨‍🍳 Cuisine :</strong> {cuisine} — <strong>💶 Prix :</strong> {price} €</p>
<p><strong>⭐ Notes :</strong> E:{location} / A:{atmosphere} / N:{food} / S:{service}</p>
<p><strong>💬 Anecdote :</strong> {anecdote}</p>
<form method="post" action="/liste/{index}/edit"><input type="hidden" name="id" value="{id}"><button type="submit">Modifier</button></form>
<form method="post" action="/liste/{index}/delete"><input type="hidden" name="id" value="{id}"><button type="submit" class="delete">Supprimer</button></form>
</div>
"#,
        name = escape_html(&r.name),
        place = escape_html(&r.place),
        date = escape_html(&r.visit_date),
        dishes = escape_html(&r.dishes),
        cuisine = escape_html(&r.cuisine_type),
        price = escape_html(&r.price),
        location = r.ratings.location,
        atmosphere = r.ratings.atmosphere,
        food = r.ratings.food,
        service = r.ratings.service,
        anecdote = escape_html(&r.anecdote).replace('\n', "<br>"),
        index = index,
        id = r.id
    )
}

pub fn render(records: &[RestaurantRecord]) -> String {
    let mut body = String::from("<h1>📋 Liste des restaurants</h1>\n");
    if records.is_empty() {
        body.push_str("<p>Aucun restaurant pour le moment.</p>\n");
    }
    for (index, record) in records.iter().enumerate() {
        body.push_str(&card(index, record));
    }

    layout("Liste", Some(View::List), "", &body)
}
