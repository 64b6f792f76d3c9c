//! Profile card for one team member.

use leptos::prelude::*;

use crate::components::reveal::Reveal;
use crate::content::team::TeamMember;
use crate::util::reveal::stagger_delay_ms;

#[component]
pub fn TeamCard(member: &'static TeamMember, index: usize) -> impl IntoView {
    view! {
        <Reveal delay_ms=stagger_delay_ms(index, 100) class="team-card">
            <div class="team-card__avatar">
                <img src=member.avatar alt=member.name loading="lazy"/>
            </div>
            <h3 class="team-card__name">{member.name}</h3>
            <p class="team-card__role">{member.role}</p>
            <p class="team-card__bio">{member.bio}</p>
            <div class="tag-list tag-list--center">
                {member.skills.iter().map(|skill| view! { <span class="tag">{*skill}</span> }).collect::<Vec<_>>()}
            </div>
            <div class="team-card__links">
                {member
                    .profile_links()
                    .into_iter()
                    .map(|link| {
                        view! {
                            <a href=link.href class="team-card__link" aria-label=format!("{}'s {}", member.name, link.network)>
                                {link.network}
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
            </div>
        </Reveal>
    }
}
